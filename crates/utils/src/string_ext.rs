/// Extends string types with useful functions
pub trait StringExt {
    /// Capilalises the first letter in a string
    ///
    /// ```rust
    /// # use isoyield_utils::StringExt;
    /// assert_eq!("sn".capitalise(), "Sn".to_string());
    /// assert_eq!("".capitalise(), "".to_string());
    /// ```
    fn capitalise(&self) -> String;

    /// Owned whitespace separated tokens
    ///
    /// ```rust
    /// # use isoyield_utils::StringExt;
    /// assert_eq!("50\t132Sn  1.2E+03".tokens(), vec!["50", "132Sn", "1.2E+03"]);
    /// assert!("   ".tokens().is_empty());
    /// ```
    fn tokens(&self) -> Vec<String>;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }

    fn tokens(&self) -> Vec<String> {
        self.as_ref()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
