/*!
# Paisley: Command Declarations.

A [`Command`] is shaped like a parameter group, except its children split two
ways: parameter groups (the command's own data, eagerly instantiated with the
command) and subcommands (nested commands, instantiated *lazily* by the
driver — and only if parsing actually selects them, since building a command
may require external context).
*/

use crate::{
	Context,
	GroupSchemaFn,
	Parameters,
};



/// # Command Schema Accessor.
pub type CommandSchemaFn = fn() -> &'static CommandSchema;

/// # Command Constructor.
///
/// Builds a boxed command instance from the shared [`Context`]. The driver
/// calls this when parsing selects a subcommand; nothing else does.
pub type ConstructFn = fn(&Context) -> Box<dyn Command>;



#[derive(Debug, Clone, Copy)]
/// # Command Schema.
///
/// The one-time registration for a [`Command`] type: its name, its
/// parameter-group fields in order, and its subcommand declarations.
///
/// The name is matched verbatim against input tokens. Keep to the usual
/// convention — lowercase, hyphens instead of underscores — unless you enjoy
/// making users type capital letters.
pub struct CommandSchema {
	/// # Command Name.
	name: &'static str,

	/// # Parameter Group Fields.
	groups: &'static [GroupSchemaFn],

	/// # Subcommands.
	subcommands: &'static [SubcommandDecl],
}

impl CommandSchema {
	#[must_use]
	/// # New Schema.
	pub const fn new(
		name: &'static str,
		groups: &'static [GroupSchemaFn],
		subcommands: &'static [SubcommandDecl],
	) -> Self {
		Self { name, groups, subcommands }
	}

	#[must_use]
	/// # Command Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Parameter Group Fields.
	pub const fn groups(&self) -> &'static [GroupSchemaFn] { self.groups }

	#[must_use]
	/// # Subcommands.
	pub const fn subcommands(&self) -> &'static [SubcommandDecl] { self.subcommands }
}



#[derive(Debug, Clone, Copy)]
/// # Subcommand Declaration.
///
/// A pointer pair tying a nested command's schema to its constructor. The
/// compiled namespace keys subcommands by the *declared command name* — the
/// one in the child's own [`CommandSchema`] — not by whatever field the
/// parent happens to store it in.
pub struct SubcommandDecl {
	/// # Schema Accessor.
	schema: CommandSchemaFn,

	/// # Constructor.
	construct: ConstructFn,
}

impl SubcommandDecl {
	#[must_use]
	/// # New.
	pub const fn new(schema: CommandSchemaFn, construct: ConstructFn) -> Self {
		Self { schema, construct }
	}

	#[must_use]
	/// # Subcommand Name.
	pub fn name(&self) -> &'static str { (self.schema)().name() }

	#[must_use]
	/// # Subcommand Schema.
	pub fn schema(&self) -> &'static CommandSchema { (self.schema)() }

	#[must_use]
	/// # Instantiate.
	///
	/// Build a fresh instance of the subcommand, defaults applied.
	pub fn construct(&self, context: &Context) -> Box<dyn Command> {
		(self.construct)(context)
	}
}



/// # Command.
///
/// A parsable unit of the CLI tree: parameter groups for data, subcommands
/// for descent, and an [`invoke`](Command::invoke) hook for behavior.
///
/// The contract mirrors [`Parameters`]: [`Command::group_mut`] must hand back
/// a group instance for every index in `schema().groups()`, in the same
/// order. Instantiation (usually `Default`) eagerly instantiates every
/// parameter-group field; subcommand fields are *not* materialized — they
/// exist only as [`SubcommandDecl`] entries until the driver constructs one.
pub trait Command {
	/// # Schema.
	///
	/// Return the command's static schema.
	fn schema() -> &'static CommandSchema where Self: Sized;

	/// # Schema (Dyn).
	///
	/// Same as [`Command::schema`], reachable through a trait object.
	/// Implementations simply forward: `Self::schema()`.
	fn command_schema(&self) -> &'static CommandSchema;

	/// # Parameter Group Access.
	///
	/// Return the group instance at `idx`, matching the order of
	/// `schema().groups()`. Commands without data can lean on the default.
	fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
		let _ = idx;
		None
	}

	/// # Invoke.
	///
	/// The user behavior, called by the driver once parsing has assigned this
	/// command its values. Does nothing by default.
	fn invoke(&mut self, context: &mut Context) {
		let _ = context;
	}
}
