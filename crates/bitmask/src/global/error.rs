use thiserror::Error;

/// `Result` type alias used by `bitmask`. Basically equal to: `Result<T, BitmaskError>`
pub type BitmaskResult<T = ()> = Result<T, BitmaskError>;

/// All errors manifestable within `bitmask` collected into a neat enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmaskError {
	/// a flag name was passed to an operation that requires it to exist in the [`Schema`](crate::schema::Schema).
	/// Only produced by named operations: [`get`](crate::Bitmask::get), [`set`](crate::Bitmask::set) and construction from flags or names
	#[error("[BitmaskError::UnknownFlag] The flag: {0} does not exist in the schema")]
	UnknownFlag(String),
	/// a schema entry was given a bit value that is zero or has more than one bit set
	#[error("[BitmaskError::InvalidFlagBits] The flag: {name} must map to a single bit, found: {bits:#b}")]
	InvalidFlagBits {
		/// name of the offending flag
		name: String,
		/// the rejected bit value
		bits: u64,
	},
	/// the same name was declared twice in one schema
	#[error("[BitmaskError::DuplicateFlag] A flag with the name: {0} already exists in the schema")]
	DuplicateFlag(String),
	/// two names in one schema share a bit
	#[error("[BitmaskError::OverlappingFlag] The flag: {name} reuses bit {bits:#b}, already taken by: {existing}")]
	OverlappingFlag {
		/// name of the flag being added
		name: String,
		/// name of the flag that already owns the bit
		existing: String,
		/// the shared bit
		bits: u64,
	},
	/// a schema declared more flags than fit in a [`u64`]
	#[error("[BitmaskError::TooManyFlags] A schema holds at most {} flags, tried to declare: {}", crate::MAX_FLAGS, .0)]
	TooManyFlags(usize),
}
