/*!
# Paisley: Errors.

Compilation and parsing fail differently: a [`CollisionError`] means the
*declarations* are broken — a programming error surfaced before any token is
looked at — while a [`ParseError`] means the *input* is bad and deserves a
polite usage diagnostic rather than a crash.
*/

use std::{
	collections::BTreeSet,
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Grammar Collision.
///
/// Two declarations somewhere in a command's flattened parameter tree claimed
/// the same name string, or two subcommands share a name. Collisions are
/// caught during [`compile_command`](crate::compile_command) — before any
/// token is consumed — and abort compilation entirely; no partial namespace
/// survives.
pub struct CollisionError {
	/// # Owning Schema.
	///
	/// The name of the group (or command) being merged when the first
	/// duplicate turned up.
	owner: &'static str,

	/// # Colliding Names.
	///
	/// The full set of duplicated name strings, sorted.
	names: Box<[&'static str]>,
}

impl Error for CollisionError {}

impl fmt::Display for CollisionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Duplicate parameter name(s) in {}: {}",
			self.owner,
			self.names.join(", "),
		)
	}
}

impl CollisionError {
	/// # New.
	pub(crate) fn new(owner: &'static str, names: BTreeSet<&'static str>) -> Self {
		Self {
			owner,
			names: names.into_iter().collect(),
		}
	}

	#[must_use]
	/// # Owning Schema.
	pub const fn owner(&self) -> &'static str { self.owner }

	#[must_use]
	/// # Colliding Names.
	///
	/// Return the full set of name strings that were declared more than once,
	/// sorted.
	pub const fn names(&self) -> &[&'static str] { &self.names }
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Coercion Failure.
///
/// A raw token could not be converted to the declared field type. The parser
/// wraps this into [`ParseError::InvalidValue`] along with the offending
/// token and the declared name it was meant for.
pub struct CoerceError {
	/// # Expected Type.
	expected: &'static str,
}

impl Error for CoerceError {}

impl fmt::Display for CoerceError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Invalid value (expected {})", self.expected)
	}
}

impl CoerceError {
	#[must_use]
	/// # New.
	pub const fn new(expected: &'static str) -> Self { Self { expected } }

	#[must_use]
	/// # Expected Type.
	///
	/// A short label for the type the conversion wanted, e.g. `"u32"`.
	pub const fn expected(&self) -> &'static str { self.expected }
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parse Error.
///
/// Runtime input errors: the user typed something the compiled grammar can't
/// place. Unlike [`CollisionError`], these are recoverable — callers should
/// print a usage diagnostic and move on with their lives.
///
/// Fields assigned before the error struck keep their values; nothing is
/// rolled back.
pub enum ParseError {
	/// # Missing Option Value.
	///
	/// A value-taking option was the last token of the input. Carries the
	/// matched option key.
	MissingValue(&'static str),

	/// # Positional Exhaustion.
	///
	/// A token matched nothing and every declared positional slot was already
	/// filled. Carries the token.
	UnexpectedArgument(String),

	/// # Coercion Failure.
	///
	/// A value was found, but the declared field type rejected it.
	InvalidValue {
		/// # Declared Name.
		target: &'static str,

		/// # Offending Token.
		value: String,

		/// # Expected Type.
		expected: &'static str,
	},
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingValue(key) => write!(f, "Missing value for {key}"),
			Self::UnexpectedArgument(token) => write!(f, "Unexpected argument: {token}"),
			Self::InvalidValue { target, value, expected } => write!(
				f,
				"Invalid value for {target}: {value} (expected {expected})",
			),
		}
	}
}

impl ParseError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a static description of the error variant, minus the details.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::MissingValue(_) => "Missing option value.",
			Self::UnexpectedArgument(_) => "Too many arguments.",
			Self::InvalidValue { .. } => "Invalid value.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # App Error.
///
/// Union of the two failure phases, returned by [`App`](crate::App) so the
/// caller only has to match once.
pub enum AppError {
	/// # Declaration Bug.
	Collision(CollisionError),

	/// # Bad Input.
	Parse(ParseError),
}

impl Error for AppError {}

impl fmt::Display for AppError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Collision(e) => e.fmt(f),
			Self::Parse(e) => e.fmt(f),
		}
	}
}

impl From<CollisionError> for AppError {
	#[inline]
	fn from(src: CollisionError) -> Self { Self::Collision(src) }
}

impl From<ParseError> for AppError {
	#[inline]
	fn from(src: ParseError) -> Self { Self::Parse(src) }
}

impl AppError {
	#[must_use]
	/// # Exit Code.
	///
	/// Declaration bugs and input errors get different codes so wrappers can
	/// tell them apart.
	pub const fn exit_code(&self) -> i32 {
		match self {
			Self::Collision(_) => 2,
			Self::Parse(_) => 1,
		}
	}
}
