/// One member of a record layout.
///
/// The canonical `name` is always written by unstructure; the
/// `alternate_names` are accepted, in order, when structuring.
///
/// ```
/// use fw_fields::FieldInfo;
///
/// const INFO: FieldInfo = FieldInfo::new("color").with_alternate_names(&["colour"]);
/// assert_eq!(INFO.names().collect::<Vec<_>>(), ["color", "colour"]);
/// assert!(INFO.is_data());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    alternate_names: &'static [&'static str],
    data: bool,
    network: bool,
}

impl FieldInfo {
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            alternate_names: &[],
            data: true,
            network: false,
        }
    }

    #[inline]
    pub const fn with_alternate_names(mut self, names: &'static [&'static str]) -> Self {
        self.alternate_names = names;
        self
    }

    /// Mark whether the member's type carries data.
    ///
    /// Zero-size members are skipped by every algorithm.
    #[inline]
    pub const fn with_data(mut self, data: bool) -> Self {
        self.data = data;
        self
    }

    /// Mark the member as taking part in byte-order conversion.
    #[inline]
    pub const fn with_network(mut self, network: bool) -> Self {
        self.network = network;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn alternate_names(&self) -> &'static [&'static str] {
        self.alternate_names
    }

    #[inline]
    pub const fn is_data(&self) -> bool {
        self.data
    }

    #[inline]
    pub const fn is_network(&self) -> bool {
        self.network
    }

    /// The canonical name followed by the alternates, in lookup order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        core::iter::once(self.name).chain(self.alternate_names.iter().copied())
    }

    /// Whether `key` is the canonical or an alternate name.
    pub fn matches(&self, key: &str) -> bool {
        self.names().any(|name| name == key)
    }
}
