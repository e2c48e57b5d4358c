/*!
# Paisley: Compiler.

The compiler walks a command's (possibly deeply nested) parameter-group tree
— schemas only, no instances — and flattens it into a single namespace: an
option-name lookup map, an ordered positional-argument sequence, and a
subcommand map, each entry bound to its field by a [`MutationAction`].

Duplicate names are a declaration bug, not an input problem, so they are
caught *here*, deterministically, before any token is looked at. Option and
positional names share one namespace; a `--name` in one subtree collides with
a `--name` anywhere else in the tree no matter the declaration order.
*/

use crate::{
	CollisionError,
	Command,
	GroupSchema,
	ParamKind,
	Parameters,
	ParseError,
	SubcommandDecl,
};
use std::collections::{
	BTreeMap,
	BTreeSet,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Mutation Operation.
///
/// What applying an action does with the matched token.
pub(crate) enum ActionOp {
	/// # Coerce-and-Store.
	///
	/// Options and positional arguments: coerce the raw token and store it.
	Store,

	/// # Store Fixed Boolean.
	///
	/// Flags: store this value — the negation of the declared default — and
	/// consume nothing.
	StoreBool(bool),
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Mutation Action.
///
/// A compile-time binding of one declared field: the structural path to its
/// owning group (group-field index on the command, then nested child
/// indices), the declaration slot within that group, and the operation to
/// perform. Applying an action is the only way the parser changes state —
/// and involves no name lookups whatsoever.
pub struct MutationAction {
	/// # Field Path.
	path: Box<[usize]>,

	/// # Declaration Slot.
	slot: usize,

	/// # Operation.
	op: ActionOp,

	/// # Display Name.
	///
	/// The declaration's first name, for diagnostics.
	title: &'static str,
}

impl MutationAction {
	/// # New.
	fn new(path: &[usize], slot: usize, op: ActionOp, title: &'static str) -> Self {
		Self {
			path: path.into(),
			slot,
			op,
			title,
		}
	}

	#[must_use]
	/// # Display Name.
	///
	/// The first name of the declaration this action is bound to.
	pub const fn title(&self) -> &'static str { self.title }

	/// # Operation.
	pub(crate) const fn op(&self) -> ActionOp { self.op }

	/// # Resolve Owning Group.
	///
	/// Walk the field path down from the command to the group instance this
	/// action mutates.
	///
	/// ## Panics
	///
	/// Panics if the command's accessors come up short of its schema — a
	/// broken trait implementation, not a reachable state for the
	/// registration pattern the traits document.
	fn resolve_mut<'a>(&self, command: &'a mut dyn Command) -> &'a mut dyn Parameters {
		let Some((&first, rest)) = self.path.split_first() else {
			panic!("Mutation action for {} has an empty field path.", self.title);
		};
		let Some(mut group) = command.group_mut(first) else {
			panic!("Command accessors do not match the compiled schema.");
		};
		for &idx in rest {
			let Some(child) = group.child_mut(idx) else {
				panic!("Group accessors do not match the compiled schema.");
			};
			group = child;
		}
		group
	}

	/// # Store a Value.
	///
	/// Coerce `raw` and write it through to the bound field.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::InvalidValue`] if the field's type rejects the
	/// token.
	///
	/// ## Panics
	///
	/// Panics if the command's accessors do not match its schema; see
	/// [`Command`] for the contract.
	pub fn store(&self, command: &mut dyn Command, raw: &str) -> Result<(), ParseError> {
		self.resolve_mut(command)
			.assign(self.slot, raw)
			.map_err(|e| ParseError::InvalidValue {
				target: self.title,
				value: raw.to_owned(),
				expected: e.expected(),
			})
	}

	/// # Trigger a Flag.
	///
	/// Write the fixed boolean through to the bound field. Does nothing for
	/// value-storing actions.
	///
	/// ## Panics
	///
	/// Panics if the command's accessors do not match its schema; see
	/// [`Command`] for the contract.
	pub fn trigger(&self, command: &mut dyn Command) {
		if let ActionOp::StoreBool(value) = self.op {
			self.resolve_mut(command).trigger(self.slot, value);
		}
	}
}



#[derive(Debug, Clone)]
/// # Compiled Command Namespace.
///
/// The flat result of [`compile_command`]: every declared option name mapped
/// to its action, every positional slot in flattened declaration order, and
/// every subcommand keyed by declared command name. Compilation is pure;
/// compiling the same command twice yields structurally equal namespaces.
pub struct CommandParserContext {
	/// # Options.
	///
	/// Long and short forms each get their own entry, all bound to the same
	/// underlying field.
	options: BTreeMap<&'static str, MutationAction>,

	/// # Positional Arguments.
	///
	/// One entry per declared `Argument`, depth-first: a group's own
	/// declarations come before its children's.
	arguments: Vec<MutationAction>,

	/// # Subcommands.
	subcommands: BTreeMap<&'static str, &'static SubcommandDecl>,
}

impl CommandParserContext {
	#[must_use]
	/// # Options.
	pub const fn options(&self) -> &BTreeMap<&'static str, MutationAction> {
		&self.options
	}

	#[must_use]
	/// # Positional Arguments.
	pub fn arguments(&self) -> &[MutationAction] { &self.arguments }

	#[must_use]
	/// # Subcommands.
	pub const fn subcommands(&self) -> &BTreeMap<&'static str, &'static SubcommandDecl> {
		&self.subcommands
	}
}



#[derive(Debug, Default)]
/// # Flattening Scratch Space.
///
/// Accumulates the namespace during the tree walk, plus the collision
/// bookkeeping: one `seen` set spanning option *and* positional names, and
/// the full set of duplicates found, reported together at the end.
struct Flattened {
	/// # Options.
	options: BTreeMap<&'static str, MutationAction>,

	/// # Positional Arguments.
	arguments: Vec<MutationAction>,

	/// # Every Name Seen.
	seen: BTreeSet<&'static str>,

	/// # Duplicates.
	collisions: BTreeSet<&'static str>,

	/// # First Colliding Owner.
	clash_owner: Option<&'static str>,
}

impl Flattened {
	/// # Record a Collision.
	fn clash(&mut self, owner: &'static str, name: &'static str) {
		self.collisions.insert(name);
		if self.clash_owner.is_none() {
			self.clash_owner = Some(owner);
		}
	}
}



/// # Compile One Group's Own Declarations.
///
/// Expand every name of every declaration directly owned by `schema` into
/// the namespace, all forms of one declaration bound to the same slot.
fn compile_definitions(schema: &'static GroupSchema, path: &[usize], flat: &mut Flattened) {
	for (slot, decl) in schema.params().iter().enumerate() {
		let op = match decl.kind() {
			ParamKind::Flag(default) => ActionOp::StoreBool(! default),
			ParamKind::Argument | ParamKind::Option => ActionOp::Store,
		};
		let action = MutationAction::new(path, slot, op, decl.title());

		for &name in decl.names() {
			if flat.seen.insert(name) {
				// Only named kinds land in the lookup map; positional names
				// are registered for collision checking alone.
				if ! matches!(decl.kind(), ParamKind::Argument) {
					flat.options.insert(name, action.clone());
				}
			}
			else { flat.clash(schema.name(), name); }
		}

		if matches!(decl.kind(), ParamKind::Argument) {
			flat.arguments.push(action);
		}
	}
}

/// # Compile a Parameter Group.
///
/// Compile the group's own declarations, then recurse depth-first into its
/// children, extending `path` as it goes.
fn compile_parameter_group(
	schema: &'static GroupSchema,
	path: &mut Vec<usize>,
	flat: &mut Flattened,
) {
	compile_definitions(schema, path, flat);

	for (idx, child) in schema.children().iter().enumerate() {
		path.push(idx);
		compile_parameter_group(child(), path, flat);
		path.pop();
	}
}

/// # Compile a Command.
///
/// Flatten the command's parameter-group tree into a single
/// [`CommandParserContext`] and gather its subcommand map, keyed by each
/// subcommand's declared name.
///
/// ## Examples
///
/// ```
/// use paisley::{
///     coerce, CoerceError, Command, CommandSchema, Declaration, GroupSchema,
///     Parameters,
/// };
///
/// #[derive(Debug, Default)]
/// struct Person { name: Option<String> }
///
/// impl Parameters for Person {
///     fn schema() -> &'static GroupSchema {
///         static PARAMS: [Declaration; 1] = [Declaration::option(&["--name"])];
///         static SCHEMA: GroupSchema = GroupSchema::new("person", &PARAMS, &[]);
///         &SCHEMA
///     }
///     fn group_schema(&self) -> &'static GroupSchema { Self::schema() }
///     fn assign(&mut self, slot: usize, raw: &str) -> Result<(), CoerceError> {
///         if slot == 0 { self.name = Some(coerce(raw)?); }
///         Ok(())
///     }
/// }
///
/// #[derive(Debug, Default)]
/// struct Main { person: Person }
///
/// impl Command for Main {
///     fn schema() -> &'static CommandSchema {
///         static GROUPS: [paisley::GroupSchemaFn; 1] = [Person::schema];
///         static SCHEMA: CommandSchema = CommandSchema::new("main", &GROUPS, &[]);
///         &SCHEMA
///     }
///     fn command_schema(&self) -> &'static CommandSchema { Self::schema() }
///     fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
///         if idx == 0 { Some(&mut self.person) } else { None }
///     }
/// }
///
/// let mut main = Main::default();
/// let compiled = paisley::compile_command(&main).unwrap();
/// assert!(compiled.options().contains_key("--name"));
///
/// // The compiled action is bound to the field, ready for the parser.
/// compiled.options()["--name"].store(&mut main, "Mike").unwrap();
/// assert_eq!(main.person.name.as_deref(), Some("Mike"));
/// ```
///
/// ## Errors
///
/// Returns a [`CollisionError`] naming every duplicated string if any two
/// declarations in the flattened tree — or any two subcommands — share a
/// name. No partial namespace is returned.
pub fn compile_command(command: &dyn Command) -> Result<CommandParserContext, CollisionError> {
	let schema = command.command_schema();
	let mut flat = Flattened::default();

	let mut path = Vec::new();
	for (idx, group) in schema.groups().iter().enumerate() {
		path.push(idx);
		compile_parameter_group(group(), &mut path, &mut flat);
		path.pop();
	}

	let mut subcommands = BTreeMap::new();
	for sub in schema.subcommands() {
		if subcommands.insert(sub.name(), sub).is_some() {
			flat.clash(schema.name(), sub.name());
		}
	}

	if flat.collisions.is_empty() {
		Ok(CommandParserContext {
			options: flat.options,
			arguments: flat.arguments,
			subcommands,
		})
	}
	else {
		let owner = flat.clash_owner.unwrap_or_else(|| schema.name());
		Err(CollisionError::new(owner, flat.collisions))
	}
}
