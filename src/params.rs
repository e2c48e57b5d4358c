/*!
# Paisley: Parameter Declarations.

This module holds the declarative half of the engine: [`Declaration`] value
objects describing a single user-facing parameter, [`GroupSchema`] statics
describing a whole parameter group type, and the [`Parameters`] trait that
binds a schema to a concrete value holder.

Schemas are registered once per type — a `static` built from `const fn`
builders — and never mutated afterward. The [compiler](crate::compile_command)
only ever reads them.
*/

use crate::CoerceError;
use std::str::FromStr;



/// # Group Schema Accessor.
///
/// Schemas reference their nested children through plain function pointers so
/// the whole tree stays `const`-constructible.
pub type GroupSchemaFn = fn() -> &'static GroupSchema;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Parameter Kind.
pub enum ParamKind {
	/// # Positional Argument.
	///
	/// Matched by position, never by name; the name is only used for
	/// diagnostics (and collision checks).
	Argument,

	/// # Named Option.
	///
	/// Matched by exact name; consumes the following token as its value.
	Option,

	/// # Named Flag.
	///
	/// Matched by exact name; consumes nothing. Carries the declared default
	/// so that triggering can store its negation.
	Flag(bool),
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Parameter Declaration.
///
/// One user-facing parameter: its accepted name forms, its kind, and a help
/// blurb. Constructed once at registration time and immutable thereafter.
///
/// Names are stored exactly as given. By convention `--xyz` is a long option,
/// `-x` a short option, and a bare `XYZ` a positional placeholder, but the
/// engine never enforces any of that; tokens match declarations by exact
/// string comparison alone.
///
/// ## Examples
///
/// ```
/// use paisley::Declaration;
///
/// const NAME: Declaration = Declaration::option(&["--name", "-n"])
///     .with_help("The name to greet.");
///
/// assert_eq!(NAME.names(), ["--name", "-n"]);
/// assert_eq!(NAME.title(), "--name");
/// ```
pub struct Declaration {
	/// # Accepted Names.
	names: &'static [&'static str],

	/// # Kind.
	kind: ParamKind,

	/// # Help Blurb.
	help: &'static str,
}

impl Declaration {
	#[must_use]
	/// # New Positional Argument.
	///
	/// The name list should hold a single placeholder like `"NAME"`; extra
	/// entries are harmless but only widen the collision check.
	pub const fn argument(names: &'static [&'static str]) -> Self {
		Self { names, kind: ParamKind::Argument, help: "" }
	}

	#[must_use]
	/// # New Value-Taking Option.
	pub const fn option(names: &'static [&'static str]) -> Self {
		Self { names, kind: ParamKind::Option, help: "" }
	}

	#[must_use]
	/// # New Boolean Flag.
	///
	/// The `default` must match the value the owning field initializes to;
	/// triggering the flag stores the negation.
	pub const fn flag(names: &'static [&'static str], default: bool) -> Self {
		Self { names, kind: ParamKind::Flag(default), help: "" }
	}

	#[must_use]
	/// # With Help.
	pub const fn with_help(self, help: &'static str) -> Self {
		Self {
			names: self.names,
			kind: self.kind,
			help,
		}
	}
}

impl Declaration {
	#[must_use]
	/// # Accepted Names.
	pub const fn names(&self) -> &'static [&'static str] { self.names }

	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> ParamKind { self.kind }

	#[must_use]
	/// # Help Blurb.
	pub const fn help(&self) -> &'static str { self.help }

	#[must_use]
	/// # Display Name.
	///
	/// The first declared name, used for diagnostics.
	pub const fn title(&self) -> &'static str {
		match self.names {
			&[first, ..] => first,
			&[] => "",
		}
	}
}



#[derive(Debug, Clone, Copy)]
/// # Parameter Group Schema.
///
/// The one-time registration for a [`Parameters`] type: its own declarations
/// in order, plus accessors for the schemas of its nested child groups, also
/// in order. A declaration's position in `params` is its *slot*, the index
/// the compiled mutation actions use to address the field; a child's position
/// in `children` likewise pairs with [`Parameters::child_mut`].
pub struct GroupSchema {
	/// # Group Name.
	///
	/// Only used for diagnostics.
	name: &'static str,

	/// # Own Declarations.
	params: &'static [Declaration],

	/// # Nested Groups.
	children: &'static [GroupSchemaFn],
}

impl GroupSchema {
	#[must_use]
	/// # New Schema.
	pub const fn new(
		name: &'static str,
		params: &'static [Declaration],
		children: &'static [GroupSchemaFn],
	) -> Self {
		Self { name, params, children }
	}

	#[must_use]
	/// # Group Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Own Declarations.
	pub const fn params(&self) -> &'static [Declaration] { self.params }

	#[must_use]
	/// # Nested Groups.
	pub const fn children(&self) -> &'static [GroupSchemaFn] { self.children }
}



/// # Parameter Group.
///
/// A declarative container of parameters and/or nested parameter groups,
/// bound to a field on an owning [`Command`](crate::Command) or parent group.
///
/// Implementations pair a [`GroupSchema`] with slot-indexed mutation entry
/// points. The contract the compiler and parser rely on:
///
/// * [`Parameters::child_mut`] must hand back a child for every index in
///   `schema().children()`, in the same order;
/// * [`Parameters::assign`]/[`Parameters::trigger`] must write the field
///   whose declaration sits at that slot in `schema().params()`;
/// * instantiation (usually `Default`) materializes declared defaults and
///   eagerly instantiates every child group.
///
/// Slots a group does not declare as value-taking (or boolean) are inert;
/// the default method bodies ignore them.
///
/// ## Examples
///
/// ```
/// use paisley::{coerce, CoerceError, Declaration, GroupSchema, Parameters};
///
/// #[derive(Debug, Default)]
/// struct Naming {
///     name: Option<String>,
///     formal: bool,
/// }
///
/// impl Parameters for Naming {
///     fn schema() -> &'static GroupSchema {
///         static PARAMS: [Declaration; 2] = [
///             Declaration::option(&["--name", "-n"]).with_help("The name to greet."),
///             Declaration::flag(&["--formal"], false).with_help("Mind your manners."),
///         ];
///         static SCHEMA: GroupSchema = GroupSchema::new("naming", &PARAMS, &[]);
///         &SCHEMA
///     }
///
///     fn group_schema(&self) -> &'static GroupSchema { Self::schema() }
///
///     fn assign(&mut self, slot: usize, raw: &str) -> Result<(), CoerceError> {
///         if slot == 0 { self.name = Some(coerce(raw)?); }
///         Ok(())
///     }
///
///     fn trigger(&mut self, slot: usize, value: bool) {
///         if slot == 1 { self.formal = value; }
///     }
/// }
/// ```
pub trait Parameters {
	/// # Schema.
	///
	/// Return the group's static schema. This should point at a `static`
	/// built once at registration time, not a fresh allocation.
	fn schema() -> &'static GroupSchema where Self: Sized;

	/// # Schema (Dyn).
	///
	/// Same as [`Parameters::schema`], reachable through a trait object.
	/// Implementations simply forward: `Self::schema()`.
	fn group_schema(&self) -> &'static GroupSchema;

	/// # Nested Group Access.
	///
	/// Return the child group instance at `idx`, matching the order of
	/// `schema().children()`. Groups without children can lean on the
	/// default.
	fn child_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
		let _ = idx;
		None
	}

	/// # Assign a Value Slot.
	///
	/// Coerce `raw` and store it in the field declared at `slot`. Unknown
	/// slots are a no-op.
	///
	/// ## Errors
	///
	/// Return a [`CoerceError`] if the raw token cannot be converted to the
	/// field's type.
	fn assign(&mut self, slot: usize, raw: &str) -> Result<(), CoerceError> {
		let _ = (slot, raw);
		Ok(())
	}

	/// # Trigger a Flag Slot.
	///
	/// Store the fixed boolean in the field declared at `slot`. Unknown
	/// slots are a no-op.
	fn trigger(&mut self, slot: usize, value: bool) {
		let _ = (slot, value);
	}
}



/// # Coerce a Raw Token.
///
/// Apply the standard conversion — [`FromStr`] — to a raw token. This is the
/// pluggable seam [`Parameters::assign`] implementations are expected to
/// reach for, though any `&str -> Result` conversion will do.
///
/// ## Examples
///
/// ```
/// assert_eq!(paisley::coerce::<u32>("42"), Ok(42));
/// assert!(paisley::coerce::<u32>("forty-two").is_err());
/// ```
///
/// ## Errors
///
/// Returns a [`CoerceError`] labelled with the target type if conversion
/// fails.
pub fn coerce<T: FromStr>(raw: &str) -> Result<T, CoerceError> {
	raw.parse::<T>().map_err(|_| {
		let full = std::any::type_name::<T>();
		let short = full.rsplit("::").next().unwrap_or(full);
		CoerceError::new(short)
	})
}
