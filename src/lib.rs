//! The KECCAK-p permutation from [FIPS 202](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf),
//! generic over 8, 16, 32 and 64 bit lanes.
//!
//! This is only the permutation. Padding, absorbing and squeezing belong to
//! whatever sponge or duplex construction is built on top of it.
//!
//! ```
//! let mut state = [0u64; 25];
//!
//! keccakp::f1600(&mut state);
//! assert_eq!(state[0], 0xF1258F7940E1DDE7);
//!
//! // twelve rounds, as used by KangarooTwelve
//! keccakp::p1600(&mut state, 12).unwrap();
//!
//! // KECCAK-f[1600] only has 24 rounds
//! let before = state;
//! assert!(keccakp::p1600(&mut state, 25).is_err());
//! assert_eq!(state, before);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), any(doc, test)))]
extern crate std;

mod constants;
mod error;
mod keccak_lane;

pub use constants::{PI_INDICES, PLEN, RHO_OFFSETS, ROUND_CONSTANTS};
pub use error::RoundCountTooHigh;
pub use keccak_lane::{max_rounds, KeccakLane};

use constants::round_constant_window;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod rho_pi;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::rho_pi::rho_pi;
use components::theta::theta;


/// A full 5x5 state, lane `(x, y)` stored at index `5 * y + x`.
pub type State<T> = [T; PLEN];

/// Applies KECCAK-p\[25 * w, `round_count`\] to `state` in place, where `w` is
/// the bit width of `T`.
///
/// The rounds run are the last `round_count` rounds of KECCAK-f for that
/// width, so `round_count == T::KECCAK_F_ROUND_COUNT` is KECCAK-f itself and
/// zero rounds leave the state untouched. Asking for more rounds than
/// KECCAK-f has fails without touching the state.
pub fn keccak_p<T: KeccakLane>(state: &mut State<T>, round_count: usize) -> Result<(), RoundCountTooHigh> {
	if round_count > T::KECCAK_F_ROUND_COUNT {
		log::debug!(
			"rejected keccak-p[{}] with {} rounds (max {})",
			PLEN * T::WIDTH,
			round_count,
			T::KECCAK_F_ROUND_COUNT,
		);

		return Err(RoundCountTooHigh {
			requested: round_count,
			max: T::KECCAK_F_ROUND_COUNT,
			state_bits: PLEN * T::WIDTH,
		});
	}

	log::trace!("keccak-p[{}, {}]", PLEN * T::WIDTH, round_count);

	run_rounds(state, round_constant_window::<T>(round_count));

	Ok(())
}

fn run_rounds<T: KeccakLane>(state: &mut State<T>, round_constants: &[u64]) {
	for &rc in round_constants {
		round(state, rc);
	}
}

/// One round, with `rc` truncated to the lane width in iota.
pub(crate) fn round<T: KeccakLane>(state: &mut State<T>, rc: u64) {
	theta(state);
	rho_pi(state);
	chi(state);
	iota(state, rc);
}

macro_rules! impl_keccak {
	($pname:ident, $fname:ident, $type:ty, $bits:literal) => {
		#[doc = concat!("KECCAK-p[", $bits, ", `round_count`] on 25 `", stringify!($type), "` lanes.")]
		pub fn $pname(state: &mut State<$type>, round_count: usize) -> Result<(), RoundCountTooHigh> {
			keccak_p(state, round_count)
		}

		#[doc = concat!("KECCAK-f[", $bits, "] on 25 `", stringify!($type), "` lanes.")]
		pub fn $fname(state: &mut State<$type>) {
			run_rounds(state, round_constant_window::<$type>(<$type>::KECCAK_F_ROUND_COUNT));
		}
	};
}

impl_keccak!(p200, f200, u8, "200");
impl_keccak!(p400, f400, u16, "400");
impl_keccak!(p800, f800, u32, "800");
impl_keccak!(p1600, f1600, u64, "1600");
