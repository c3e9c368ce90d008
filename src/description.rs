use std::fmt;

/// Something that can describe itself into a [`Description`].
pub trait SelfDescribing {
    fn describe_to(&self, description: &mut Description);
}

impl<T: SelfDescribing + ?Sized> SelfDescribing for &T {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }
}

impl<T: SelfDescribing + ?Sized> SelfDescribing for Box<T> {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }
}

/// An ordered text sink matchers write expectations and mismatches into.
///
/// Every `append_*` method returns `&mut Self` so calls chain:
///
/// ```rust
/// use cherry::Description;
///
/// let mut description = Description::new();
/// description.append_text("a string ").append_value(&"foo");
/// assert_eq!(description.as_str(), r#"a string "foo""#);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Appends the `Debug` rendering of `value`, so strings come out quoted.
    pub fn append_value<V: fmt::Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        use fmt::Write;
        let _ = write!(self.text, "{value:?}");
        self
    }

    pub fn append_description_of<D: SelfDescribing + ?Sized>(&mut self, value: &D) -> &mut Self {
        value.describe_to(self);
        self
    }

    /// Appends each item's own description between `start` and `end`.
    pub fn append_list<'a, D, I>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        items: I,
    ) -> &mut Self
    where
        D: SelfDescribing + ?Sized + 'a,
        I: IntoIterator<Item = &'a D>,
    {
        self.append_text(start);
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            item.describe_to(self);
        }
        self.append_text(end)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.text
    }
}
