use core::fmt::Debug;
use core::ops::{BitAnd, BitXor, BitXorAssign, Not};

mod sealed {
	pub trait Sealed {}

	impl Sealed for u8 {}
	impl Sealed for u16 {}
	impl Sealed for u32 {}
	impl Sealed for u64 {}
}

/// An unsigned integer usable as one lane of the 5x5 Keccak state.
///
/// The lane width fixes the permutation family: 25 lanes of `u8` make up
/// KECCAK-p\[200\], `u16` KECCAK-p\[400\], `u32` KECCAK-p\[800\] and `u64`
/// KECCAK-p\[1600\]. This trait is sealed, so no other width can be used.
pub trait KeccakLane:
	sealed::Sealed +
	BitAnd<Output = Self> +
	BitXor<Output = Self> +
	BitXorAssign +
	Not<Output = Self> +
	Debug +
	Default +
	PartialEq +
	Sized +
	Copy +
{
	/// Base two logarithm of the lane width in bits (`l` in FIPS 202).
	const LOG2_WIDTH: usize;

	/// Lane width in bits.
	const WIDTH: usize = 1 << Self::LOG2_WIDTH;

	/// Rounds in the full KECCAK-f permutation for this width.
	const KECCAK_F_ROUND_COUNT: usize = 12 + 2 * Self::LOG2_WIDTH;

	/// Circular left rotation. `amount` is taken modulo the lane width.
	fn rotate(self, amount: u32) -> Self;

	/// Keeps the low `WIDTH` bits of a round constant.
	fn truncate(rc: u64) -> Self;
}

macro_rules! impl_keccak_lane {
	($type:ty, $log2_width:expr) => {
		impl KeccakLane for $type {
			const LOG2_WIDTH: usize = $log2_width;

			#[inline(always)]
			fn rotate(self, amount: u32) -> Self {
				self.rotate_left(amount)
			}

			#[inline(always)]
			fn truncate(rc: u64) -> Self {
				rc as Self
			}
		}
	};
}

impl_keccak_lane!(u8, 3);
impl_keccak_lane!(u16, 4);
impl_keccak_lane!(u32, 5);
impl_keccak_lane!(u64, 6);

/// Largest round count accepted for lanes of type `L`.
pub const fn max_rounds<L: KeccakLane>() -> usize {
	L::KECCAK_F_ROUND_COUNT
}

#[test]
fn round_count_ceilings() {
	assert_eq!(max_rounds::<u8>(), 18);
	assert_eq!(max_rounds::<u16>(), 20);
	assert_eq!(max_rounds::<u32>(), 22);
	assert_eq!(max_rounds::<u64>(), 24);
}

#[test]
fn widths_match_integer_types() {
	assert_eq!(u8::WIDTH, 8);
	assert_eq!(u16::WIDTH, 16);
	assert_eq!(u32::WIDTH, 32);
	assert_eq!(u64::WIDTH, 64);
}

#[test]
fn truncation_keeps_low_bits() {
	let rc = 0x8000_0000_8000_808b;

	assert_eq!(u8::truncate(rc), 0x8b);
	assert_eq!(u16::truncate(rc), 0x808b);
	assert_eq!(u32::truncate(rc), 0x8000_808b);
	assert_eq!(u64::truncate(rc), rc);
}

#[test]
fn rotation_wraps_within_lane() {
	assert_eq!(0x81u8.rotate(1), 0x03);
	assert_eq!(0x8001u16.rotate(4), 0x0018);
	// offsets past the width wrap around, as the shared rho table relies on
	assert_eq!(0x01u8.rotate(36), 0x10);
	assert_eq!(1u64.rotate(63), 1 << 63);
}
