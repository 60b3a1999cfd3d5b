use std::{
	fmt,
	hash::{Hash, Hasher},
	sync::Arc,
};

use hashbrown::HashMap;
use super::{error::*, name::FlagName};

/// A single `name => bit` pair of a [`Schema`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlagEntry {
	/// Symbolic name of the flag
	pub name: Arc<str>,
	/// The single bit this flag occupies
	pub bits: u64,
}

/// An ordered, immutable mapping from flag names to bits.
///
/// Built once through a [`SchemaBuilder`] and shared through an [`Arc`] by every [`Bitmask`](crate::Bitmask) made from it.
/// Insertion order is the iteration order of [`to_h`](crate::Bitmask::to_h), [`to_a`](crate::Bitmask::to_a) and [`each`](crate::Bitmask::each).
#[derive(Clone)]
pub struct Schema {
	entries: Vec<FlagEntry>,
	index: HashMap<Arc<str>, usize>,
	mask: u64,
}

impl Schema {
	/// Start declaring a new schema
	#[inline(always)]
	pub fn builder() -> SchemaBuilder {
		SchemaBuilder::default()
	}

	/// Build a schema from explicit `(name, bits)` pairs, in order.
	///```
	/// use bitmask::prelude::*;
	///
	/// let schema = Schema::new([("phone", 0b01), ("name", 0b10)]).unwrap();
	/// assert_eq!(schema.bits_of("name"), Some(0b10));
	///```
	pub fn new<I, N>(pairs: I) -> BitmaskResult<Arc<Schema>>
	where
		I: IntoIterator<Item = (N, u64)>,
		N: FlagName,
	{
		pairs
			.into_iter()
			.fold(Schema::builder(), |builder, (name, bits)| builder.flag(name, bits))
			.build()
	}

	/// Build a schema assigning `1 << index` to every name, in order
	pub fn from_names<I, N>(names: I) -> BitmaskResult<Arc<Schema>>
	where
		I: IntoIterator<Item = N>,
		N: FlagName,
	{
		let names = names.into_iter().collect::<Vec<_>>();
		if names.len() > crate::MAX_FLAGS {
			return Err(BitmaskError::TooManyFlags(names.len()));
		};

		Schema::new(names.into_iter().enumerate().map(|(idx, name)| (name, 1u64 << idx)))
	}

	/// Number of flags declared
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the schema declares no flags at all
	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Checks whether a flag with the given name exists
	#[inline(always)]
	pub fn contains<N: FlagName>(&self, name: N) -> bool {
		self.index.contains_key(name.flag_name())
	}

	/// The bit assigned to `name`, if any
	#[inline]
	pub fn bits_of<N: FlagName>(&self, name: N) -> Option<u64> {
		self.index.get(name.flag_name()).map(|idx| self.entries[*idx].bits)
	}

	/// Like [`bits_of`](Schema::bits_of), but fails with [`BitmaskError::UnknownFlag`]
	pub(crate) fn require<N: FlagName>(&self, name: N) -> BitmaskResult<u64> {
		let name = name.flag_name();
		self.bits_of(name)
			.ok_or_else(|| BitmaskError::UnknownFlag(name.to_string()))
	}

	/// The union of every bit declared in this schema
	#[inline(always)]
	pub fn mask(&self) -> u64 {
		self.mask
	}

	/// Declared entries, in order
	#[inline(always)]
	pub fn iter(&self) -> std::slice::Iter<'_, FlagEntry> {
		self.entries.iter()
	}

	/// Declared names, in order
	pub fn names(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
		self.entries.iter().map(|entry| &entry.name)
	}
}

// Two schemas are the same if they declare the same flags in the same order, `index` and `mask` are derived
impl PartialEq for Schema {
	fn eq(&self, other: &Schema) -> bool {
		self.entries == other.entries
	}
}

impl Eq for Schema {}

impl Hash for Schema {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.entries.hash(state)
	}
}

impl<'a> IntoIterator for &'a Schema {
	type Item = &'a FlagEntry;
	type IntoIter = std::slice::Iter<'a, FlagEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Debug for Schema {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.entries.iter().map(|entry| (&entry.name, entry.bits)))
			.finish()
	}
}

/// Fluent declaration of a [`Schema`], validated on [`build`](SchemaBuilder::build).
///```
/// use bitmask::prelude::*;
///
/// let schema = Schema::builder()
/// 	.flag("phone", 0b0000001)
/// 	.flag("name", 0b0000010)
/// 	.flag("email", 0b0001000)
/// 	.build()
/// 	.unwrap();
///
/// assert_eq!(schema.mask(), 0b0001011);
///```
#[derive(Debug, Default, Clone)]
pub struct SchemaBuilder {
	pending: Vec<(Arc<str>, u64)>,
}

impl SchemaBuilder {
	/// Append a flag, keeps declaration order
	pub fn flag<N: FlagName>(mut self, name: N, bits: u64) -> Self {
		self.pending.push((Arc::from(name.flag_name()), bits));
		self
	}

	/// Validate and freeze the declared flags.
	///
	/// Every flag must own exactly one bit, names and bits must be unique, and at most [`MAX_FLAGS`](crate::MAX_FLAGS) may be declared.
	pub fn build(self) -> BitmaskResult<Arc<Schema>> {
		if self.pending.len() > crate::MAX_FLAGS {
			return Err(BitmaskError::TooManyFlags(self.pending.len()));
		};

		let mut entries: Vec<FlagEntry> = Vec::with_capacity(self.pending.len());
		let mut index = HashMap::with_capacity(self.pending.len());
		let mut mask = 0u64;

		for (name, bits) in self.pending {
			if !bits.is_power_of_two() {
				return Err(BitmaskError::InvalidFlagBits { name: name.to_string(), bits });
			};

			if index.contains_key(&name) {
				return Err(BitmaskError::DuplicateFlag(name.to_string()));
			};

			if let Some(existing) = entries.iter().find(|entry| entry.bits == bits) {
				return Err(BitmaskError::OverlappingFlag {
					name: name.to_string(),
					existing: existing.name.to_string(),
					bits,
				});
			};

			mask |= bits;
			index.insert(name.clone(), entries.len());
			entries.push(FlagEntry { name, bits });
		}

		log::debug!("Built schema with {} flag(s), mask: {:#b}", entries.len(), mask);

		Ok(Arc::new(Schema { entries, index, mask }))
	}
}
