use std::{
	fmt,
	hash::{Hash, Hasher},
	sync::Arc,
};

use indexmap::IndexMap;
use crate::global::{
	error::*,
	initial::{resolve_flags, Initial},
	name::FlagName,
	schema::Schema,
};

/// An immutable set of named flags packed into a [`u64`].
///
/// Every operation that looks like a mutation ([`set`](Bitmask::set), [`set_array`](Bitmask::set_array)) returns a new [`Bitmask`],
/// the receiver is never modified. Cloning is cheap, the [`Schema`] is shared through an [`Arc`].
///```
/// use bitmask::prelude::*;
///
/// let schema = Schema::new([("phone", 0b001), ("name", 0b010), ("email", 0b100)]).unwrap();
/// let bitmask = Bitmask::new(&schema, ["phone", "email"]).unwrap();
///
/// assert_eq!(bitmask.to_i(), 0b101);
/// assert!(bitmask.get("email").unwrap());
///
/// let renamed = bitmask.set("name", true).unwrap();
/// assert!(renamed.get("name").unwrap());
/// assert!(!bitmask.get("name").unwrap());
///```
#[derive(Clone)]
pub struct Bitmask {
	schema: Arc<Schema>,
	bits: u64,
}

impl Bitmask {
	/// Construct a [`Bitmask`] from any [`Initial`] value.
	///
	/// Integers are taken verbatim. Flags and names are validated against the schema, fails with [`BitmaskError::UnknownFlag`] on the first unknown name
	pub fn new<I: Into<Initial>>(schema: &Arc<Schema>, initial: I) -> BitmaskResult<Bitmask> {
		let bits = initial.into().resolve(schema)?;
		Ok(Bitmask::from_bits(schema, bits))
	}

	/// Wrap a raw integer, bits outside the schema are kept as is
	#[inline(always)]
	pub fn from_bits(schema: &Arc<Schema>, bits: u64) -> Bitmask {
		Bitmask {
			schema: Arc::clone(schema),
			bits,
		}
	}

	/// A [`Bitmask`] with every bit off
	#[inline(always)]
	pub fn empty(schema: &Arc<Schema>) -> Bitmask {
		Bitmask::from_bits(schema, 0)
	}

	/// Construct from `(name, toggle)` pairs, names left out are off
	pub fn from_flags<I, N>(schema: &Arc<Schema>, flags: I) -> BitmaskResult<Bitmask>
	where
		I: IntoIterator<Item = (N, bool)>,
		N: FlagName,
	{
		let bits = resolve_flags(schema, flags)?;
		Ok(Bitmask::from_bits(schema, bits))
	}

	/// Construct from the names of the flags that should be on
	pub fn from_names<I, N>(schema: &Arc<Schema>, names: I) -> BitmaskResult<Bitmask>
	where
		I: IntoIterator<Item = N>,
		N: FlagName,
	{
		Bitmask::from_flags(schema, names.into_iter().map(|name| (name, true)))
	}

	/// Checks whether the named flag is on
	#[inline]
	pub fn get<N: FlagName>(&self, name: N) -> BitmaskResult<bool> {
		let bits = self.schema.require(name)?;
		Ok((self.bits & bits) != 0)
	}

	/// Returns a copy with the named flag forced on (`toggle == true`) or off. Fails with [`BitmaskError::UnknownFlag`] if the schema lacks `name`
	pub fn set<N: FlagName>(&self, name: N, toggle: bool) -> BitmaskResult<Bitmask> {
		let bits = self.schema.require(name)?;

		let bits = if toggle { self.bits | bits } else { self.bits & !bits };
		Ok(self.with_bits(bits))
	}

	/// Returns a copy where every schema flag is explicitly set: on if it appears in `names`, off otherwise.
	/// Bits outside the schema are carried over untouched.
	///
	/// NOTE: unlike [`set`](Bitmask::set) and [`new`](Bitmask::new), names missing from the schema are skipped, not rejected.
	/// Existing callers depend on this, do not unify the two without checking with them first.
	pub fn set_array<I, N>(&self, names: I) -> Bitmask
	where
		I: IntoIterator<Item = N>,
		N: FlagName,
	{
		let toggled = names.into_iter().fold(0u64, |acc, name| match self.schema.bits_of(&name) {
			Some(bits) => acc | bits,
			None => {
				log::trace!("set_array: skipping unknown flag {}", name.flag_name());
				acc
			},
		});

		self.with_bits((self.bits & !self.schema.mask()) | toggled)
	}

	/// Returns a copy of the underlying number, including bits outside the schema
	#[inline(always)]
	pub fn to_i(&self) -> u64 {
		self.bits
	}

	/// Every schema flag mapped to its state, in schema order
	pub fn to_h(&self) -> IndexMap<Arc<str>, bool> {
		self.schema
			.iter()
			.map(|entry| (Arc::clone(&entry.name), self.bits & entry.bits != 0))
			.collect()
	}

	/// The names of the flags that are on, in schema order
	pub fn to_a(&self) -> Vec<Arc<str>> {
		self.schema
			.iter()
			.filter(|entry| self.bits & entry.bits != 0)
			.map(|entry| Arc::clone(&entry.name))
			.collect()
	}

	/// Calls `callback` once per schema flag, in schema order, with the flag's name and state
	pub fn each<F: FnMut(&str, bool)>(&self, mut callback: F) {
		self.iter().for_each(|(name, toggle)| callback(name, toggle))
	}

	/// Iterate over `(name, state)` for every schema flag, in schema order
	pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
		self.schema
			.iter()
			.map(move |entry| (entry.name.as_ref(), self.bits & entry.bits != 0))
	}

	/// The schema this [`Bitmask`] was built from
	#[inline(always)]
	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	/// Whether no schema flag is on, bits outside the schema are not considered
	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.bits & self.schema.mask() == 0
	}

	/// Bits that have no name in the schema, only ever present when constructed from an integer
	#[inline(always)]
	pub fn unknown_bits(&self) -> u64 {
		self.bits & !self.schema.mask()
	}

	#[inline(always)]
	fn with_bits(&self, bits: u64) -> Bitmask {
		Bitmask {
			schema: Arc::clone(&self.schema),
			bits,
		}
	}
}

impl PartialEq for Bitmask {
	fn eq(&self, other: &Bitmask) -> bool {
		self.bits == other.bits && (Arc::ptr_eq(&self.schema, &other.schema) || self.schema == other.schema)
	}
}

impl Eq for Bitmask {}

impl Hash for Bitmask {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.schema.hash(state);
		self.bits.hash(state);
	}
}

impl From<&Bitmask> for u64 {
	#[inline(always)]
	fn from(bitmask: &Bitmask) -> u64 {
		bitmask.bits
	}
}

impl From<Bitmask> for u64 {
	#[inline(always)]
	fn from(bitmask: Bitmask) -> u64 {
		bitmask.bits
	}
}

impl fmt::Display for Bitmask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Bitmask[")?;

		for (idx, name) in self.iter().filter(|(_, toggle)| *toggle).map(|(name, _)| name).enumerate() {
			if idx > 0 {
				write!(f, " | ")?;
			}

			write!(f, "{}", name)?;
		}

		write!(f, "]")
	}
}

impl fmt::Debug for Bitmask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: <{}u64 : {:#066b}>", self, self.bits, self.bits)
	}
}
