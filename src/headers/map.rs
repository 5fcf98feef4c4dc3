use fnv::FnvHashMap;

use super::{HeaderError, name};

/// HTTP Headers map.
///
/// Keys are always valid tokens stored in lowercase. Iteration order is unspecified.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: FnvHashMap<String, String>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns headers length.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if the map contains a value for given header name, case-insensitively.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name::lowercase(name).as_ref())
    }

    /// Returns the value for given header name, case-insensitively.
    ///
    /// ```rust
    /// use wirehttp::headers::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.set("Content-Type", "text/html").unwrap();
    /// assert_eq!(map.get("content-type"), Some("text/html"));
    /// assert_eq!(map.get("CONTENT-TYPE"), Some("text/html"));
    /// ```
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name::lowercase(name).as_ref())
            .map(String::as_str)
    }

    /// Returns an iterator over headers as lowercase name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.fields.iter(),
        }
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Set a header value.
    ///
    /// If the map already have this header, the new value is joined to the existing one with
    /// `", "`.
    ///
    /// # Errors
    ///
    /// Returns error if the name is not a valid token, or the value contains a line break.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), HeaderError> {
        let name = name::normalize(name)?;
        let value = value.into();
        name::validate_value(&value)?;
        self.append_normalized(name.into_owned(), value);
        Ok(())
    }

    /// Insert a header value, overwriting any existing value.
    ///
    /// Returns the previous value if any.
    ///
    /// # Errors
    ///
    /// Returns error if the name is not a valid token, or the value contains a line break.
    pub fn replace(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<Option<String>, HeaderError> {
        let name = name::normalize(name)?;
        let value = value.into();
        name::validate_value(&value)?;
        Ok(self.fields.insert(name.into_owned(), value))
    }

    /// Removes a header from the map, returning the value if the name was previously in the map.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name::lowercase(name).as_ref())
    }

    /// Clears the map, keeping the allocated memory for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// `name` must already be a lowercase token.
    pub(crate) fn append_normalized(&mut self, name: String, value: String) {
        debug_assert!(name::is_token(name.as_bytes()));
        debug_assert!(!name.bytes().any(|b| b.is_ascii_uppercase()));

        match self.fields.get_mut(&name) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => {
                self.fields.insert(name, value);
            }
        }
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ===== Iter =====

/// Iterator over [`HeaderMap`] name and value pairs.
#[derive(Debug)]
pub struct Iter<'a> {
    inner: std::collections::hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
