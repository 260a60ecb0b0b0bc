#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
}

#[derive(Default)]
pub(crate) struct Logger {
    enable: bool,
    window: usize,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    pub(crate) fn new(enable: bool, window: usize) -> Self {
        Self { enable, window, entries: Vec::new() }
    }

    #[inline]
    pub(crate) fn log(&mut self, position: usize, message: &'static str) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                position,
                message,
                context: String::new(),
            });
        }
    }

    /// Log with a snippet of `src` around the byte offset `position`.
    #[inline]
    pub(crate) fn log_with_context(&mut self, src: &str, position: usize, message: &'static str) {
        if self.enable {
            let context = build_context(src, position, self.window);
            self.entries.push(RepairLogEntry {
                position,
                message,
                context,
            });
        }
    }

    pub(crate) fn into_entries(self) -> Vec<RepairLogEntry> {
        self.entries
    }
}

fn build_context(src: &str, pos: usize, win: usize) -> String {
    if pos > src.len() || !src.is_char_boundary(pos) {
        return String::new();
    }
    let before: Vec<char> = src[..pos].chars().rev().take(win).collect();
    let mut s: String = before.into_iter().rev().collect();
    s.extend(src[pos..].chars().take(win));
    s
}
