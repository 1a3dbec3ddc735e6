use std::io::{self, Write};

/// Name used when none is given on the command line.
pub const DEFAULT_NAME: &str = "World";

/// Builds the greeting line for `name`, trailing newline included.
pub fn greeting(name: &str) -> String {
    format!("Hello, {}! 👋\n", name)
}

/// Writes the greeting for `name` to `writer` and flushes it.
pub fn write_greeting<W: Write>(writer: &mut W, name: &str) -> io::Result<()> {
    writer.write_all(greeting(name).as_bytes())?;
    writer.flush()
}

/// Prints the greeting for `name` on standard output.
pub fn greet(name: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_greeting(&mut handle, name)
}

/// Says hi to `name`, see [`greet`].
pub fn say_hi(name: &str) -> io::Result<()> {
    greet(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn written(name: &str) -> String {
        let mut buf = Vec::new();
        write_greeting(&mut buf, name).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_greeting_default_name() {
        assert_eq!(greeting(DEFAULT_NAME), "Hello, World! 👋\n");
    }

    #[test]
    fn test_greeting_with_name() {
        assert_eq!(greeting("Alice"), "Hello, Alice! 👋\n");
    }

    #[test]
    fn test_greeting_empty_name() {
        assert_eq!(greeting(""), "Hello, ! 👋\n");
    }

    #[test]
    fn test_greeting_keeps_name_verbatim() {
        assert_eq!(greeting("  Zoë  "), "Hello,   Zoë  ! 👋\n");
        assert_eq!(greeting("{name}"), "Hello, {name}! 👋\n");
    }

    #[test]
    fn test_write_greeting() {
        assert_eq!(written("Bob"), "Hello, Bob! 👋\n");
        assert_eq!(written(""), "Hello, ! 👋\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_greeting_reports_write_errors() {
        let err = write_greeting(&mut BrokenPipe, "Alice").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
