use serde::{Deserialize, Serialize};

pub const DEFAULT_BUFFER_SIZE: usize = 1 << 16;

/// Which bytes separate tokens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Whitespace {
    /// space, `\n`, `\r` and `\t`
    #[default]
    Standard,
    /// any byte `<= 0x20`
    Control,
}

impl Whitespace {
    #[inline(always)]
    pub fn contains(self, b: u8) -> bool {
        match self {
            Whitespace::Standard => matches!(b, b' ' | b'\n' | b'\r' | b'\t'),
            Whitespace::Control => b <= b' ',
        }
    }
}

/// What `Printer::ensure_capacity` does when a write does not fit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Growth {
    /// hand the buffered bytes to the stream and start over at zero
    #[default]
    Flush,
    /// keep everything in memory until an explicit flush
    Grow,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerOptions {
    pub buffer_size: usize,
    pub whitespace: Whitespace,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            whitespace: Whitespace::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterOptions {
    pub buffer_size: usize,
    pub growth: Growth,
    /// flush after every `ln`/`println`
    pub auto_flush: bool,
    pub yes: String,
    pub no: String,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            growth: Growth::default(),
            auto_flush: false,
            yes: "Yes".to_string(),
            no: "No".to_string(),
        }
    }
}
