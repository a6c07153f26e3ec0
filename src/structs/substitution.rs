/// One literal (old, new) pair fed through the backup-and-replace primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub old: String,
    pub new: String,
}

impl Substitution {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Keeps `anchor` in place and adds `insertion` right after it.
    pub fn insert_after(anchor: &str, insertion: &str) -> Self {
        Self::new(anchor, format!("{}{}", anchor, insertion))
    }
}

impl From<(&str, &str)> for Substitution {
    fn from((old, new): (&str, &str)) -> Self {
        Self::new(old, new)
    }
}
