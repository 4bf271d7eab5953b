//! Tests for error handling under adverse filesystem conditions

#[cfg(unix)]
mod unix_tests {
    use mirror_fs::{DirectorySnapshot, Error, Fingerprint, copy_entry};
    use std::ffi::OsStr;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn unreadable_directory_is_directory_access_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        let result = DirectorySnapshot::take(&locked);

        let _ = fs::set_permissions(&locked, Permissions::from_mode(0o755));
        assert!(matches!(result, Err(Error::DirectoryAccess { .. })));
    }

    #[test]
    fn copy_into_readonly_directory_fails() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        fs::write(src.path().join("a.txt"), "a").unwrap();
        fs::set_permissions(dst.path(), Permissions::from_mode(0o555)).unwrap();

        let result = copy_entry(src.path(), dst.path(), OsStr::new("a.txt"));

        let _ = fs::set_permissions(dst.path(), Permissions::from_mode(0o755));
        assert!(matches!(result, Err(Error::FileOperation { .. })));
    }

    #[test]
    fn unreadable_file_is_hash_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let path = dir.path().join("secret.txt");
        fs::write(&path, "secret").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o000)).unwrap();

        let result = Fingerprint::of_file(&path);

        let _ = fs::set_permissions(&path, Permissions::from_mode(0o644));
        assert!(matches!(result, Err(Error::Hash { .. })));
    }

    #[test]
    fn directory_fingerprint_is_hash_error() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        assert!(matches!(Fingerprint::of_file(&sub), Err(Error::Hash { .. })));
    }
}
