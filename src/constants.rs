/// The 32 standard ASCII punctuation characters, each as a standalone token.
///
/// An n-gram window is discarded when any of its tokens is *exactly* one of
/// these. Tokens that merely contain punctuation, and non-ASCII punctuation,
/// are left alone.
pub const ASCII_PUNCTUATION_TOKENS: &[&str] = &[
    "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/", ":", ";", "<",
    "=", ">", "?", "@", "[", "\\", "]", "^", "_", "`", "{", "|", "}", "~",
];

/// Column headers of the exported frequency table, in order.
pub const CSV_HEADERS: [&str; 2] = ["N-gram", "Frequency"];
