use std::{collections::HashMap, hash::BuildHasher, sync::Arc};

use indexmap::IndexMap;
use super::{error::*, name::FlagName, schema::Schema};

/// The starting value of a [`Bitmask`](crate::Bitmask), see [`Bitmask::new`](crate::Bitmask::new).
///
/// Usually produced through one of the `From` implementations:
///```
/// use bitmask::prelude::*;
///
/// assert_eq!(Initial::from(11u64), Initial::Bits(11));
/// assert_eq!(Initial::from(["phone", "name"]), Initial::names(["phone", "name"]));
/// assert_eq!(Initial::from([("phone", true)]), Initial::flags([("phone", true)]));
///```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initial {
	/// A raw integer, taken as is. Bits missing from the schema are kept, but have no named accessor
	Bits(u64),
	/// Named flags toggled on or off, names left out default to off
	Flags(Vec<(Arc<str>, bool)>),
	/// Names of the flags that are on, everything else is off. Repeats are harmless
	Names(Vec<Arc<str>>),
}

impl Initial {
	/// Collect `(name, toggle)` pairs into [`Initial::Flags`]
	pub fn flags<I, N>(flags: I) -> Initial
	where
		I: IntoIterator<Item = (N, bool)>,
		N: FlagName,
	{
		Initial::Flags(
			flags
				.into_iter()
				.map(|(name, toggle)| (Arc::from(name.flag_name()), toggle))
				.collect(),
		)
	}

	/// Collect names into [`Initial::Names`]
	pub fn names<I, N>(names: I) -> Initial
	where
		I: IntoIterator<Item = N>,
		N: FlagName,
	{
		Initial::Names(names.into_iter().map(|name| Arc::from(name.flag_name())).collect())
	}

	/// Compute the integer value against `schema`. Fails on the first name the schema lacks
	pub(crate) fn resolve(&self, schema: &Schema) -> BitmaskResult<u64> {
		match self {
			Initial::Bits(bits) => Ok(*bits),
			Initial::Flags(flags) => resolve_flags(schema, flags.iter().map(|(name, toggle)| (name, *toggle))),
			Initial::Names(names) => resolve_flags(schema, names.iter().map(|name| (name, true))),
		}
	}
}

/// OR together the bits of every toggled-on flag, validating every name, including those toggled off
pub(crate) fn resolve_flags<I, N>(schema: &Schema, flags: I) -> BitmaskResult<u64>
where
	I: IntoIterator<Item = (N, bool)>,
	N: FlagName,
{
	flags.into_iter().try_fold(0u64, |acc, (name, toggle)| -> BitmaskResult<u64> {
		let bits = schema.require(name)?;
		Ok(if toggle { acc | bits } else { acc })
	})
}

impl From<u64> for Initial {
	#[inline(always)]
	fn from(bits: u64) -> Initial {
		Initial::Bits(bits)
	}
}

impl From<&[&str]> for Initial {
	fn from(names: &[&str]) -> Initial {
		Initial::names(names)
	}
}

impl From<Vec<&str>> for Initial {
	fn from(names: Vec<&str>) -> Initial {
		Initial::names(names)
	}
}

impl<const N: usize> From<[&str; N]> for Initial {
	fn from(names: [&str; N]) -> Initial {
		Initial::names(names)
	}
}

impl From<&[(&str, bool)]> for Initial {
	fn from(flags: &[(&str, bool)]) -> Initial {
		Initial::flags(flags.iter().copied())
	}
}

impl From<Vec<(&str, bool)>> for Initial {
	fn from(flags: Vec<(&str, bool)>) -> Initial {
		Initial::flags(flags)
	}
}

impl<const N: usize> From<[(&str, bool); N]> for Initial {
	fn from(flags: [(&str, bool); N]) -> Initial {
		Initial::flags(flags)
	}
}

impl<K: FlagName, S: BuildHasher> From<HashMap<K, bool, S>> for Initial {
	fn from(flags: HashMap<K, bool, S>) -> Initial {
		Initial::flags(flags)
	}
}

impl<K: FlagName, S: BuildHasher> From<IndexMap<K, bool, S>> for Initial {
	fn from(flags: IndexMap<K, bool, S>) -> Initial {
		Initial::flags(flags)
	}
}
