#![cfg(feature = "typed")]
#![cfg_attr(docsrs, doc(cfg(feature = "typed")))]

use std::sync::Arc;

use crate::global::{error::BitmaskResult, initial::Initial, name::FlagName, schema::Schema};

/// A closed enumeration of flags, usually declared through [`flags!`](crate::flags)
pub trait Flag: FlagName + Copy + 'static {
	/// Every variant, in declaration order
	const ALL: &'static [Self];

	/// The schema name of this variant
	fn name(self) -> &'static str;

	/// The single bit this variant occupies
	fn bits(self) -> u64;
}

impl<F: Flag, const N: usize> From<[F; N]> for Initial {
	fn from(flags: [F; N]) -> Initial {
		Initial::names(flags)
	}
}

impl<F: Flag> From<Vec<F>> for Initial {
	fn from(flags: Vec<F>) -> Initial {
		Initial::names(flags)
	}
}

impl Schema {
	/// Build a schema from every variant of `F`, in declaration order
	pub fn of<F: Flag>() -> BitmaskResult<Arc<Schema>> {
		Schema::new(F::ALL.iter().map(|flag| (flag.name(), flag.bits())))
	}
}

/// Declare an enum of flags, together with its [`Schema`](crate::schema::Schema).
///
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`, and implements [`Flag`](crate::Flag) and [`FlagName`](crate::FlagName).
/// Variant names double as flag names. Each bit value is checked at compile time to be a single bit, not shared with any other variant.
///```
/// use bitmask::prelude::*;
///
/// bitmask::flags! {
/// 	pub enum Contact {
/// 		Phone = 0b001,
/// 		Name = 0b010,
/// 		Email = 0b100,
/// 	}
/// }
///
/// let schema = Contact::schema();
/// let bitmask = Bitmask::from_names(&schema, [Contact::Phone, Contact::Email]).unwrap();
///
/// assert_eq!(bitmask.to_i(), 0b101);
/// assert!(bitmask.get(Contact::Phone).unwrap());
///```
///
/// Two variants on the same bit are rejected at compile time:
///```compile_fail
/// bitmask::flags! {
/// 	enum Clash {
/// 		Phone = 0b01,
/// 		Mobile = 0b01,
/// 	}
/// }
///```
#[macro_export]
macro_rules! flags {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident = $bits:expr
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		$(
			const _: () = assert!(($bits as u64).is_power_of_two(), concat!("flag ", stringify!($variant), " must occupy exactly one bit"));
		)+

		const _: () = {
			let union = 0u64 $(| ($bits as u64))+;
			let count = [$(stringify!($variant)),+].len();
			assert!(union.count_ones() as usize == count, concat!("flags of ", stringify!($name), " must not share bits"));
		};

		impl $crate::Flag for $name {
			const ALL: &'static [Self] = &[$($name::$variant),+];

			#[inline(always)]
			fn name(self) -> &'static str {
				match self {
					$($name::$variant => stringify!($variant)),+
				}
			}

			#[inline(always)]
			fn bits(self) -> u64 {
				match self {
					$($name::$variant => $bits),+
				}
			}
		}

		impl $crate::FlagName for $name {
			#[inline(always)]
			fn flag_name(&self) -> &str {
				$crate::Flag::name(*self)
			}
		}

		impl $name {
			/// The process-wide schema of this enum, built on first use
			#[allow(dead_code)]
			$vis fn schema() -> ::std::sync::Arc<$crate::schema::Schema> {
				static SCHEMA: ::std::sync::OnceLock<::std::sync::Arc<$crate::schema::Schema>> = ::std::sync::OnceLock::new();

				let schema = SCHEMA.get_or_init(|| match $crate::schema::Schema::of::<$name>() {
					Ok(schema) => schema,
					// bit shape and overlaps are rejected at compile time
					Err(err) => unreachable!("invalid flags declaration for {}: {}", stringify!($name), err),
				});

				::std::sync::Arc::clone(schema)
			}
		}
	};
}
