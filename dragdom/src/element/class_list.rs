/// Ordered set of class names on an element.
///
/// Mirrors the browser `classList`: names are unique, insertion order is
/// kept, and a whitespace-separated string adds each name in turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one or more whitespace-separated class names.
    /// Empty input is a no-op.
    pub fn add(&mut self, names: &str) {
        for name in names.split_whitespace() {
            if !self.contains(name) {
                self.names.push(name.to_string());
            }
        }
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Flip a class on or off. Returns true if the class is now present.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.add(name);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}
