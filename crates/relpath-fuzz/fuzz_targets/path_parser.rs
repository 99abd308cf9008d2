#![no_main]

use libfuzzer_sys::fuzz_target;
use relpath_core::RelPath;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let direct = RelPath::new(s);

        // The JSON route must accept and reject exactly the same strings
        let json = serde_json::to_string(s).unwrap();
        let via_json = serde_json::from_str::<RelPath>(&json);
        assert_eq!(direct.is_ok(), via_json.is_ok());

        if let Ok(path) = direct {
            assert_eq!(path.as_str(), s);
            assert_eq!(path.dirname().resolve(&path.name()), path);
            assert!(path.starts_with(&path.dirname()));
            assert_eq!(path.components().count(), path.component_count());
        }
    }
});
