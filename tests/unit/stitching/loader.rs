//! Tests for classifying tile files into channel groups

#[cfg(test)]
mod tests {
    use crate::flat_tile;
    use gridstitch::StitchError;
    use gridstitch::stitching::loader::{ChannelGroup, ChannelTag, group_tiles, is_hidden};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn touch_tile(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        flat_tile(2, 2, 0).save(&path).unwrap();
        path
    }

    fn group(groups: &[ChannelGroup], tag: ChannelTag) -> &ChannelGroup {
        groups.iter().find(|g| g.tag == tag).unwrap()
    }

    // Tests each marker classifies to its own channel
    // Verified by reordering the marker table
    #[test]
    fn test_classify_single_markers() {
        assert_eq!(ChannelTag::classify("XY01_CH1_001.tif"), Some(ChannelTag::Ch1));
        assert_eq!(ChannelTag::classify("XY01_CH2_001.tif"), Some(ChannelTag::Ch2));
        assert_eq!(ChannelTag::classify("XY01_CH3_001.tif"), Some(ChannelTag::Ch3));
        assert_eq!(ChannelTag::classify("XY01_CH4_001.tif"), Some(ChannelTag::Ch4));
        assert_eq!(
            ChannelTag::classify("XY01_Overlay_001.tif"),
            Some(ChannelTag::Overlay)
        );
        assert_eq!(ChannelTag::classify("XY01_notes.tif"), None);
    }

    // Tests names matching several markers go to the highest priority one
    // Verified by testing tags from last to first
    #[test]
    fn test_classify_priority() {
        assert_eq!(ChannelTag::classify("CH4_CH2.tif"), Some(ChannelTag::Ch2));
        assert_eq!(ChannelTag::classify("Overlay_CH3.tif"), Some(ChannelTag::Ch3));
        assert_eq!(ChannelTag::classify("CH1CH2CH3CH4Overlay"), Some(ChannelTag::Ch1));
    }

    // Tests markers are case sensitive like the acquisition software writes them
    // Verified by lowercasing before matching
    #[test]
    fn test_classify_case_sensitive() {
        assert_eq!(ChannelTag::classify("xy01_ch1_001.tif"), None);
        assert_eq!(ChannelTag::classify("overlay.tif"), None);
    }

    // Tests tags display their marker and order by priority
    // Verified by displaying the variant name
    #[test]
    fn test_tag_display_and_order() {
        let markers: Vec<String> = ChannelTag::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(markers, vec!["CH1", "CH2", "CH3", "CH4", "Overlay"]);
        assert!(ChannelTag::Ch1 < ChannelTag::Overlay);
    }

    // Tests output names join base name and tag
    // Verified by dropping the separator
    #[test]
    fn test_output_name() {
        let group = ChannelGroup {
            tag: ChannelTag::Overlay,
            paths: Vec::new(),
        };
        assert_eq!(group.output_name("A01"), "A01_Overlay");
    }

    // Tests grouping sorts by file name and ignores foreign files
    // Verified by removing the sort
    #[test]
    fn test_group_tiles_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let third = touch_tile(dir, "XY01_CH1_003.tif");
        let first = touch_tile(dir, "XY01_CH1_001.tif");
        let second = touch_tile(dir, "XY01_CH1_002.tif");
        let overlay = touch_tile(dir, "XY01_Overlay_001.tif");
        fs::write(dir.join("XY01_CH1_004.png"), "wrong extension").unwrap();
        fs::write(dir.join("readme.tif"), "no marker").unwrap();
        fs::create_dir(dir.join("CH2_folder.tif")).unwrap();

        let groups = group_tiles(dir).unwrap();

        let tags: Vec<ChannelTag> = groups.iter().map(|g| g.tag).collect();
        assert_eq!(tags, ChannelTag::ALL.to_vec());
        assert_eq!(group(&groups, ChannelTag::Ch1).paths, vec![first, second, third]);
        assert_eq!(group(&groups, ChannelTag::Overlay).paths, vec![overlay]);
        assert!(group(&groups, ChannelTag::Ch2).paths.is_empty());
        assert!(group(&groups, ChannelTag::Ch3).paths.is_empty());
    }

    // Tests AppleDouble companions next to real tiles are not grouped
    // Verified by removing the hidden name check
    #[test]
    fn test_group_tiles_ignores_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let tiles = crate::write_tiles(dir, "XY01_CH1", 9, 2, 2);
        for i in 1..=9 {
            fs::write(dir.join(format!("._XY01_CH1_{i:03}.tif")), "resource fork").unwrap();
        }

        let groups = group_tiles(dir).unwrap();

        assert_eq!(group(&groups, ChannelTag::Ch1).paths, tiles);
    }

    // Tests the tile extension matches regardless of case
    // Verified by comparing the extension exactly
    #[test]
    fn test_group_tiles_upper_case_extension() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let upper = touch_tile(dir, "XY01_CH1_001.TIF");
        let mixed = touch_tile(dir, "XY01_CH1_002.Tif");

        let groups = group_tiles(dir).unwrap();

        assert_eq!(group(&groups, ChannelTag::Ch1).paths, vec![upper, mixed]);
    }

    // Tests tiles whose names are not UTF-8 are left out of every group
    // Verified by classifying the lossy file name
    #[cfg(unix)]
    #[test]
    fn test_group_tiles_ignores_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let name = OsStr::from_bytes(b"XY01_CH1_\xff.tif");
        flat_tile(2, 2, 0).save(dir.join(name)).unwrap();
        let valid = touch_tile(dir, "XY01_CH1_001.tif");

        let groups = group_tiles(dir).unwrap();

        assert_eq!(group(&groups, ChannelTag::Ch1).paths, vec![valid]);
    }

    // Tests only leading dots mark hidden entries
    // Verified by matching dots anywhere in the name
    #[test]
    fn test_is_hidden() {
        assert!(is_hidden("._XY01_CH1_001.tif"));
        assert!(is_hidden(".XY01"));
        assert!(!is_hidden("XY01_CH1_001.tif"));
        assert!(!is_hidden("XY01"));
    }

    // Tests an ambiguous file lands in exactly one group
    // Verified by appending to every matching group
    #[test]
    fn test_group_tiles_ambiguous_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let ambiguous = touch_tile(temp_dir.path(), "XY01_CH3_Overlay.tif");

        let groups = group_tiles(temp_dir.path()).unwrap();

        let holders: Vec<ChannelTag> = groups
            .iter()
            .filter(|g| g.paths.contains(&ambiguous))
            .map(|g| g.tag)
            .collect();
        assert_eq!(holders, vec![ChannelTag::Ch3]);
    }

    // Tests an empty folder yields five empty groups
    // Verified by omitting empty groups
    #[test]
    fn test_group_tiles_empty_folder() {
        let temp_dir = TempDir::new().unwrap();

        let groups = group_tiles(temp_dir.path()).unwrap();

        assert_eq!(groups.len(), 5);
        assert!(groups.iter().all(|g| g.paths.is_empty()));
    }

    // Tests unreadable folders report the path
    // Verified by returning empty groups for missing folders
    #[test]
    fn test_group_tiles_missing_folder() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("XY99");

        match group_tiles(&missing) {
            Err(StitchError::FileSystem { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }
}
