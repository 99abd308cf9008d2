#![no_main]

use libfuzzer_sys::fuzz_target;
use relpath_core::{PathCaches, RelPath};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let caches = PathCaches::default();

    let mut committed = Vec::new();
    for line in text.lines().take(100) {
        match caches.index_of_str(line) {
            Ok(index) => committed.push((line, index)),
            Err(_) => assert!(RelPath::new(line).is_err()),
        }
    }

    // Re-interning gives the same index and reverse lookup the same path
    for (line, index) in committed {
        assert_eq!(caches.index_of_str(line).unwrap(), index);
        assert_eq!(caches.resolve_index(index).unwrap().as_str(), line);
    }
});
