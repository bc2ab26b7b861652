/// Bold text, `**like this**`.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";
}

/// Italic text, `*like this*`.
///
/// Must be split after [`Strong`] so that `**` is never read as two
/// empty italic runs.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "*";
}
