//! File-backed values (`{KEY}_FILE` pointing at a mounted secret)

use crate::env::Environment;

/// Read the file named by `file_key`, if it is set and readable.
///
/// Every failure degrades to `None` so callers fall back to the plain key.
/// One trailing newline is stripped from the content.
pub(crate) fn read_file_value<E: Environment + ?Sized>(env: &E, file_key: &str) -> Option<String> {
    let path = env.lookup(file_key)?;

    let bytes = match env.read_file(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(key = file_key, path = %path, error = %e, "secret file unreadable, using plain key");
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(content) => Some(strip_newline(content)),
        Err(e) => {
            tracing::debug!(key = file_key, path = %path, error = %e, "secret file is not UTF-8, using plain key");
            None
        }
    }
}

fn strip_newline(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;

    struct FakeFs {
        vars: HashMap<String, String>,
        files: HashMap<String, Vec<u8>>,
    }

    impl Environment for FakeFs {
        fn lookup(&self, key: &str) -> Option<String> {
            self.vars.get(key).cloned()
        }

        fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn fake(path: &str, content: &[u8]) -> FakeFs {
        FakeFs {
            vars: HashMap::from([("APP_SECRET_FILE".to_string(), path.to_string())]),
            files: HashMap::from([("/run/secrets/app".to_string(), content.to_vec())]),
        }
    }

    #[test]
    fn test_reads_and_strips_one_newline() {
        let env = fake("/run/secrets/app", b"s3cret\n\n");
        assert_eq!(read_file_value(&env, "APP_SECRET_FILE").as_deref(), Some("s3cret\n"));
    }

    #[test]
    fn test_keeps_carriage_return() {
        let env = fake("/run/secrets/app", b"s3cret\r\n");
        assert_eq!(read_file_value(&env, "APP_SECRET_FILE").as_deref(), Some("s3cret\r"));
    }

    #[test]
    fn test_content_otherwise_verbatim() {
        let env = fake("/run/secrets/app", b"  spaced  ");
        assert_eq!(read_file_value(&env, "APP_SECRET_FILE").as_deref(), Some("  spaced  "));
    }

    #[test]
    fn test_unset_key() {
        let env = fake("/run/secrets/app", b"x");
        assert_eq!(read_file_value(&env, "OTHER_FILE"), None);
    }

    #[test]
    fn test_missing_file() {
        let env = fake("/run/secrets/missing", b"x");
        assert_eq!(read_file_value(&env, "APP_SECRET_FILE"), None);
    }

    #[test]
    fn test_invalid_utf8() {
        let env = fake("/run/secrets/app", &[0xff, 0xfe]);
        assert_eq!(read_file_value(&env, "APP_SECRET_FILE"), None);
    }
}
