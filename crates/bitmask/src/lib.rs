#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

/*!
Immutable named flags, packed into a single [`u64`].

A [`Schema`](schema::Schema) maps names to bits once, every [`Bitmask`] built from it shares it.
Nothing is ever modified in place: [`set`](Bitmask::set) and [`set_array`](Bitmask::set_array) hand back a fresh [`Bitmask`],
so values can be passed around and read from any number of threads without locking.

### 🔫 Cargo Features
- `typed`: Enables the [`Flag`] trait and the [`flags!`] macro, closed enumerations as flag names.
- `default`: Enables the `typed` feature.

### 🀄 Show me some code _dang it!_

```
use bitmask::prelude::*;

let schema = Schema::builder()
	.flag("phone", 0b0000001)
	.flag("name", 0b0000010)
	.flag("gender", 0b0000100)
	.flag("email", 0b0001000)
	.flag("birthday", 0b0100000)
	.flag("location", 0b1000000)
	.build()
	.unwrap();

let bitmask = Bitmask::new(&schema, [("phone", true), ("name", true), ("email", true)]).unwrap();
assert_eq!(bitmask.to_i(), 11);
assert_eq!(bitmask.to_a().iter().map(|name| &**name).collect::<Vec<_>>(), ["phone", "name", "email"]);

// Unknown names are an error here...
assert!(matches!(bitmask.set("fax", true), Err(BitmaskError::UnknownFlag(_))));

// ...but silently skipped here
let other = bitmask.set_array(["phone", "fax"]);
assert_eq!(other.to_i(), 1);

// roundtrip
assert_eq!(Bitmask::from_bits(&schema, bitmask.to_i()), bitmask);
```
*/


pub(crate) mod global;

mod bitmask;

#[cfg(feature = "typed")]
#[cfg_attr(docsrs, doc(cfg(feature = "typed")))]
mod typed;

/// Maximum number of flags a single [`Schema`](schema::Schema) can hold, ie the width of a [`u64`]
pub const MAX_FLAGS: usize = u64::BITS as usize;

pub use crate::bitmask::Bitmask;
pub use crate::global::{error::*, initial::Initial, name::FlagName};

#[cfg(feature = "typed")]
#[cfg_attr(docsrs, doc(cfg(feature = "typed")))]
pub use crate::typed::Flag;

/// Flag schemas, [`Schema`](crate::schema::Schema) and [`SchemaBuilder`](crate::schema::SchemaBuilder)
pub mod schema {
	pub use crate::global::schema::{FlagEntry, Schema, SchemaBuilder};
}

/// Consolidated crate imports.
pub mod prelude {
	pub use crate::{Bitmask, Initial, FlagName, MAX_FLAGS};
	pub use crate::global::error::*;
	pub use crate::schema::*;

	#[cfg(feature = "typed")]
	pub use crate::Flag;
}
