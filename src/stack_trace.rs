use std::{fmt::Write, path::PathBuf};

const HEADER: &str = "Backtrace (most recent call first):";
const UNKNOWN: &str = "<unknown>";

// Path prefixes of the capturing machinery itself; these frames are cut off
// from the top of the trace
const INTERNAL_PREFIXES: [&str; 2] = ["backtrace::", "rotating_logger::"];
const LOG_ADAPTER_PREFIX: &str = "rotating_logger::log_adapter::";
const LOG_FACADE_PREFIX: &str = "log::";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) function: Option<String>,
    pub(crate) file: Option<PathBuf>,
    pub(crate) line: Option<u32>,
}
impl Frame {
    // `<rotating_logger::Foo as log::Log>::log` is matched by its leading path
    fn starts_with(&self, prefix: &str) -> bool {
        self.function
            .as_deref()
            .is_some_and(|f| f.trim_start_matches('<').starts_with(prefix))
    }

    fn is_internal(&self) -> bool {
        INTERNAL_PREFIXES.iter().any(|p| self.starts_with(p))
    }
}

// Captures the current call stack, innermost frame first, starting with the caller
// of the logger. Inlined functions show up as separate frames.
pub(crate) fn capture() -> Vec<Frame> {
    let bt = ::backtrace::Backtrace::new();
    let mut frames = Vec::with_capacity(bt.frames().len());
    for frame in bt.frames() {
        let symbols = frame.symbols();
        if symbols.is_empty() {
            frames.push(Frame::default());
        }
        for symbol in symbols {
            frames.push(Frame {
                function: symbol.name().map(|name| format!("{name:#}")),
                file: symbol.filename().map(PathBuf::from),
                line: symbol.lineno(),
            });
        }
    }
    strip_internal_frames(frames)
}

// Removes the leading run of internal frames, and, if the logger was called through
// the `log` facade, the facade's frames right above it.
// Frames before the first internal one (unresolved platform frames) go, too.
fn strip_internal_frames(frames: Vec<Frame>) -> Vec<Frame> {
    let Some(first_internal) = frames.iter().position(Frame::is_internal) else {
        return frames;
    };
    let mut frames = frames.into_iter().skip(first_internal).peekable();
    let mut via_log_facade = false;
    while let Some(frame) = frames.next_if(Frame::is_internal) {
        via_log_facade |= frame.starts_with(LOG_ADAPTER_PREFIX);
    }
    if via_log_facade {
        while frames.next_if(|f| f.starts_with(LOG_FACADE_PREFIX)).is_some() {}
    }
    frames.collect()
}

// Renders the frames, one per line, without a trailing line break:
// Backtrace (most recent call first):
//     0. my_app::handle_request() src/main.rs:42
pub(crate) fn render(frames: &[Frame]) -> String {
    let mut s = String::from(HEADER);
    for (idx, frame) in frames.iter().enumerate() {
        let file = frame
            .file
            .as_ref()
            .map_or_else(|| UNKNOWN.to_string(), |p| p.display().to_string());
        write!(
            s,
            "\n  {idx:>3}. {}() {file}:{}",
            frame.function.as_deref().unwrap_or(UNKNOWN),
            frame.line.unwrap_or(0)
        )
        .ok();
    }
    s
}
