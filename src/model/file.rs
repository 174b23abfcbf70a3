use std::fmt::Debug;

/// An opaque reference to a user-selected file.
///
/// Drafts only hold the handle. Reading the content is left to the
/// `ActivityApi` implementation at submission time.
pub trait FileHandle: Clone + PartialEq + Debug {
    fn file_name(&self) -> String;
}

#[cfg(feature = "yew")]
impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}
