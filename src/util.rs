use crate::ErrorChannel;

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    DirCreate,
    LogFile,
    Write,
    Poison,
    Setup,
}

pub(crate) fn eprint_err(
    channel: &ErrorChannel,
    error_code: ErrorCode,
    msg: &str,
    err: &dyn std::error::Error,
) {
    let mut s = format!("[rotating_logger][ERRCODE::{error_code:?}] {msg}, caused by {err}");
    let mut o_source = err.source();
    while let Some(source) = o_source {
        s.push_str(&format!(": {source}"));
        o_source = source.source();
    }
    channel.report(&s);
}

pub(crate) fn eprint_msg(channel: &ErrorChannel, error_code: ErrorCode, msg: &str) {
    channel.report(&format!("[rotating_logger][ERRCODE::{error_code:?}] {msg}"));
}

#[cfg(test)]
mod test {
    use super::{eprint_err, eprint_msg, ErrorCode};
    use crate::ErrorChannel;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_report_to_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("errors.txt");
        let channel = ErrorChannel::File(path.clone());
        eprint_err(
            &channel,
            ErrorCode::Write,
            "writing failed",
            &Error::new(ErrorKind::Other, "disk full"),
        );
        eprint_msg(&channel, ErrorCode::Poison, "recovered");
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[rotating_logger][ERRCODE::Write] writing failed, caused by disk full",
                "[rotating_logger][ERRCODE::Poison] recovered",
            ]
        );
    }
}
