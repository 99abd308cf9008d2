#![no_main]

use libfuzzer_sys::fuzz_target;
use relpath_core::{RelPath, SeparatorStyle};

const STYLES: [SeparatorStyle; 2] = [SeparatorStyle::POSIX, SeparatorStyle::WINDOWS];

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for input in STYLES {
            let Ok(path) = RelPath::from_platform(&input, s) else {
                continue;
            };
            // Whatever a style agrees to write must read back unchanged
            for output in STYLES {
                if let Ok(native) = path.to_platform(&output) {
                    assert_eq!(RelPath::from_platform(&output, native.as_str()).unwrap(), path);
                }
            }
            // A path read through a style can always be written back by it
            assert!(path.to_platform(&input).is_ok());
        }
        if let Ok(path) = RelPath::from_std_path(std::path::Path::new(s)) {
            if let Ok(native) = path.to_path_buf() {
                assert_eq!(RelPath::from_std_path(&native).unwrap(), path);
            }
        }
    }
});
