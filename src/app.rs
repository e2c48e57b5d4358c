/*!
# Paisley: App Driver.

The thin loop around the core: compile the current command, parse the tokens,
invoke the behavior, and — if a subcommand was selected — construct it and go
again with whatever tokens were left over.

The engine itself is loop-free and pure; everything stateful about a run
lives here, in [`App`] and the [`Context`] it threads through each
[`invoke`](crate::Command::invoke).
*/

use crate::{
	AppError,
	Command,
	Parser,
	compile_command,
};



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Shared Invocation Context.
///
/// Passed to every command constructor and every `invoke` along the resolved
/// chain. Holds the exit code the run should report.
pub struct Context {
	/// # Exit Code.
	exit_code: i32,
}

impl Context {
	#[must_use]
	/// # New.
	pub const fn new() -> Self { Self { exit_code: 0 } }

	#[must_use]
	/// # Exit Code.
	pub const fn exit_code(&self) -> i32 { self.exit_code }

	/// # Set Exit Code.
	pub fn set_exit_code(&mut self, code: i32) { self.exit_code = code; }
}



#[derive(Debug, Clone, Copy, Default)]
/// # Application Driver.
///
/// ## Examples
///
/// ```no_run
/// use paisley::{App, Command, CommandSchema, Context};
///
/// #[derive(Debug, Default)]
/// struct Main;
///
/// impl Command for Main {
///     fn schema() -> &'static CommandSchema {
///         static SCHEMA: CommandSchema = CommandSchema::new("main", &[], &[]);
///         &SCHEMA
///     }
///     fn command_schema(&self) -> &'static CommandSchema { Self::schema() }
///     fn invoke(&mut self, _context: &mut Context) {
///         println!("Hello!");
///     }
/// }
///
/// let context = App::new()
///     .run(Box::new(Main))
///     .unwrap_or_else(|e| {
///         eprintln!("Error: {e}");
///         std::process::exit(e.exit_code());
///     });
/// std::process::exit(context.exit_code());
/// ```
pub struct App {
	/// # Context.
	context: Context,
}

impl App {
	#[must_use]
	/// # New.
	pub const fn new() -> Self {
		Self { context: Context::new() }
	}

	#[must_use]
	/// # With Context.
	///
	/// Seed the run with a pre-built context instead of the default.
	pub const fn with_context(context: Context) -> Self {
		Self { context }
	}

	/// # Run.
	///
	/// Drive `root` against the process arguments (minus the program name).
	///
	/// ## Errors
	///
	/// Returns an [`AppError`] if any command along the chain fails to
	/// compile or any parse pass rejects the input.
	pub fn run(self, root: Box<dyn Command>) -> Result<Context, AppError> {
		let tokens: Vec<String> = std::env::args().skip(1).collect();
		self.run_with(root, tokens)
	}

	/// # Run With Tokens.
	///
	/// Same as [`App::run`], but against an explicit token list.
	///
	/// Each cycle compiles the current command, parses, and invokes it; if a
	/// subcommand was selected, it is constructed — only now, with the
	/// context available — and handed the unconsumed tokens.
	///
	/// ## Errors
	///
	/// Returns an [`AppError`] if any command along the chain fails to
	/// compile or any parse pass rejects the input.
	pub fn run_with(
		mut self,
		mut command: Box<dyn Command>,
		mut tokens: Vec<String>,
	) -> Result<Context, AppError> {
		loop {
			let compiled = compile_command(&*command)?;
			let parsed = Parser::new(&compiled, tokens).parse_command(&mut *command)?;
			let (next, remaining) = parsed.into_parts();

			command.invoke(&mut self.context);

			match next {
				Some(sub) => {
					command = sub.construct(&self.context);
					tokens = remaining;
				},
				None => break,
			}
		}

		Ok(self.context)
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		coerce,
		CoerceError,
		CommandSchema,
		Declaration,
		GroupSchema,
		GroupSchemaFn,
		Parameters,
		ParseError,
		SubcommandDecl,
	};

	#[derive(Debug, Default)]
	/// # Commit Options Fixture.
	struct CommitParams {
		message: Option<String>,
	}

	impl Parameters for CommitParams {
		fn schema() -> &'static GroupSchema {
			static PARAMS: [Declaration; 1] = [
				Declaration::option(&["-m"]),
			];
			static SCHEMA: GroupSchema = GroupSchema::new("commit-params", &PARAMS, &[]);
			&SCHEMA
		}

		fn group_schema(&self) -> &'static GroupSchema { Self::schema() }

		fn assign(&mut self, slot: usize, raw: &str) -> Result<(), CoerceError> {
			if slot == 0 { self.message = Some(coerce(raw)?); }
			Ok(())
		}
	}

	#[derive(Debug, Default)]
	/// # Leaf Command Fixture.
	struct Commit {
		params: CommitParams,
	}

	impl Command for Commit {
		fn schema() -> &'static CommandSchema {
			static GROUPS: [GroupSchemaFn; 1] = [CommitParams::schema];
			static SCHEMA: CommandSchema = CommandSchema::new("commit", &GROUPS, &[]);
			&SCHEMA
		}

		fn command_schema(&self) -> &'static CommandSchema { Self::schema() }

		fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
			if idx == 0 { Some(&mut self.params) }
			else { None }
		}

		fn invoke(&mut self, context: &mut Context) {
			// Smuggle the parsed value out through the exit code.
			let len = self.params.message.as_deref().map_or(0, str::len);
			context.set_exit_code(context.exit_code() + len as i32);
		}
	}

	#[derive(Debug, Default)]
	/// # Root Command Fixture.
	struct Main;

	impl Command for Main {
		fn schema() -> &'static CommandSchema {
			static SUBS: [SubcommandDecl; 1] = [
				SubcommandDecl::new(Commit::schema, |_| Box::<Commit>::default()),
			];
			static SCHEMA: CommandSchema = CommandSchema::new("main", &[], &SUBS);
			&SCHEMA
		}

		fn command_schema(&self) -> &'static CommandSchema { Self::schema() }

		fn invoke(&mut self, context: &mut Context) {
			context.set_exit_code(context.exit_code() + 100);
		}
	}

	#[test]
	fn t_run_descends() {
		// Main invokes (+100), then Commit parses "-m yolo" and invokes (+4).
		let tokens = vec!["commit".to_owned(), "-m".to_owned(), "yolo".to_owned()];
		let context = App::new()
			.run_with(Box::<Main>::default(), tokens)
			.expect("Run failed.");
		assert_eq!(context.exit_code(), 104);
	}

	#[test]
	fn t_run_stops_at_leaf() {
		// No subcommand token: only Main runs.
		let context = App::new()
			.run_with(Box::<Main>::default(), Vec::new())
			.expect("Run failed.");
		assert_eq!(context.exit_code(), 100);
	}

	#[test]
	fn t_run_with_context() {
		let mut seed = Context::new();
		seed.set_exit_code(1);

		let context = App::with_context(seed)
			.run_with(Box::<Main>::default(), Vec::new())
			.expect("Run failed.");
		assert_eq!(context.exit_code(), 101);
	}

	#[test]
	fn t_run_bad_input() {
		// Main declares no positionals, so any stray token is an input
		// error, reported rather than invoked.
		let err = App::new()
			.run_with(Box::<Main>::default(), vec!["bogus".to_owned()])
			.expect_err("Parse error expected.");
		assert_eq!(
			err,
			AppError::Parse(ParseError::UnexpectedArgument("bogus".to_owned())),
		);
		assert_eq!(err.exit_code(), 1);
	}
}
