use std::sync::Arc;

/// Anything that can name a flag in a [`Schema`](crate::schema::Schema).
///
/// Implemented for the usual string types. Enums declared with [`flags!`](crate::flags) implement it too,
/// which turns most unknown-flag mistakes into compile errors.
pub trait FlagName {
	/// The name looked up in the schema
	fn flag_name(&self) -> &str;
}

impl FlagName for str {
	#[inline(always)]
	fn flag_name(&self) -> &str {
		self
	}
}

impl FlagName for String {
	#[inline(always)]
	fn flag_name(&self) -> &str {
		self.as_str()
	}
}

impl FlagName for Arc<str> {
	#[inline(always)]
	fn flag_name(&self) -> &str {
		self
	}
}

impl<T: FlagName + ?Sized> FlagName for &T {
	#[inline(always)]
	fn flag_name(&self) -> &str {
		(**self).flag_name()
	}
}
