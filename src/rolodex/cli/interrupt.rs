//! Ctrl+C handling for the interactive menu.
//!
//! The menu must still save when the user interrupts it. On Unix a SIGINT
//! handler is installed without `SA_RESTART`: it only raises [`INTERRUPTED`], and
//! the blocked `read(2)` on stdin returns `EINTR`. [`read_line`] surfaces that as
//! `ErrorKind::Interrupted` (std's own `read_line` would silently retry), the
//! menu returns, and the session is closed like any other exit.
//!
//! Other platforms keep the default Ctrl+C behavior, which ends the process
//! without the final save. Quit and end of input still save there.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};

pub static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
extern "C" fn on_sigint(_: nix::libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

#[cfg(unix)]
pub fn install() -> io::Result<()> {
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    let action = SigAction::new(
        SigHandler::Handler(on_sigint),
        SaFlags::empty(),
        SigSet::empty(),
    );
    // SAFETY: the handler only stores to an atomic.
    unsafe { sigaction(Signal::SIGINT, &action) }
        .map(|_| ())
        .map_err(io::Error::from)
}

#[cfg(not(unix))]
pub fn install() -> io::Result<()> {
    tracing::debug!("Ctrl+C will exit without saving on this platform");
    Ok(())
}

/// Reads one line without its line terminator. `Ok(None)` means end of input.
///
/// Returns `ErrorKind::Interrupted` once `stop` is set, whether the flag was
/// raised before the call or while it was blocked.
pub fn read_line<R: BufRead>(reader: &mut R, stop: &AtomicBool) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    loop {
        if stop.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        }
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(i) => {
                bytes.extend_from_slice(&available[..=i]);
                reader.consume(i + 1);
                break;
            }
            None => {
                let n = available.len();
                bytes.extend_from_slice(available);
                reader.consume(n);
            }
        }
    }

    if bytes.is_empty() {
        return Ok(None);
    }
    let line = String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_and_strips_terminators() {
        let stop = AtomicBool::new(false);
        let mut input = Cursor::new("first\r\nsecond\nlast");
        assert_eq!(read_line(&mut input, &stop).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input, &stop).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input, &stop).unwrap().as_deref(), Some("last"));
        assert_eq!(read_line(&mut input, &stop).unwrap(), None);
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let stop = AtomicBool::new(false);
        let mut input = Cursor::new("\n");
        assert_eq!(read_line(&mut input, &stop).unwrap().as_deref(), Some(""));
        assert_eq!(read_line(&mut input, &stop).unwrap(), None);
    }

    #[test]
    fn stop_flag_interrupts() {
        let stop = AtomicBool::new(true);
        let mut input = Cursor::new("ignored\n");
        let err = read_line(&mut input, &stop).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }

    #[cfg(unix)]
    #[test]
    fn handler_installs_without_restart() {
        use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

        install().unwrap();
        let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
        // SAFETY: swaps the handler out and straight back in.
        let current = unsafe { sigaction(Signal::SIGINT, &default) }.unwrap();
        unsafe { sigaction(Signal::SIGINT, &current) }.unwrap();

        assert!(matches!(current.handler(), SigHandler::Handler(_)));
        assert!(!current.flags().contains(SaFlags::SA_RESTART));
    }

    /// A reader that fails like a `read(2)` hit by a signal, then sets the flag.
    struct SignalledReader<'a> {
        stop: &'a AtomicBool,
    }

    impl io::Read for SignalledReader<'_> {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            self.stop.store(true, Ordering::SeqCst);
            Err(io::Error::new(io::ErrorKind::Interrupted, "EINTR"))
        }
    }

    #[test]
    fn signal_during_read_interrupts() {
        let stop = AtomicBool::new(false);
        let mut input = io::BufReader::new(SignalledReader { stop: &stop });
        let err = read_line(&mut input, &stop).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }
}
