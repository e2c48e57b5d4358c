/*!
# Paisley: Parser.

The parser consumes string tokens left to right against one compiled
[`CommandParserContext`], writing values through the compiled mutation
actions. It is a small state machine with exactly one transition: seeing the
literal `--` switches from option matching to positional-only consumption,
and nothing switches back.

Parsing stops when the tokens run out or a subcommand name matches; in the
latter case everything after the matched token is returned unconsumed for the
subcommand's own parse pass.
*/

use crate::{
	Command,
	CommandParserContext,
	ParseError,
	SubcommandDecl,
	compiler::ActionOp,
};



#[derive(Debug)]
/// # Token Parser.
///
/// One parse pass over one command. Construct it with a compiled context and
/// a token source, then feed it the command instance to mutate.
///
/// A parse pass owns its instance tree exclusively; re-parsing an
/// already-populated instance is not supported.
pub struct Parser<'a, I> {
	/// # Compiled Namespace.
	context: &'a CommandParserContext,

	/// # Token Stream.
	tokens: I,
}

impl<'a, I: Iterator<Item=String>> Parser<'a, I> {
	/// # New.
	///
	/// ## Examples
	///
	/// ```no_run
	/// # let context: paisley::CommandParserContext = unimplemented!();
	/// let tokens: Vec<String> = std::env::args().skip(1).collect();
	/// let parser = paisley::Parser::new(&context, tokens);
	/// ```
	pub fn new<T: IntoIterator<Item=String, IntoIter=I>>(
		context: &'a CommandParserContext,
		tokens: T,
	) -> Self {
		Self {
			context,
			tokens: tokens.into_iter(),
		}
	}

	/// # Parse a Command.
	///
	/// Consume tokens left to right:
	///
	/// 1. the literal `--` (seen while still matching keys) is discarded and
	///    everything after it is treated as positional;
	/// 2. a token matching a subcommand name stops the pass — the rest of
	///    the tokens belong to the subcommand;
	/// 3. a token matching an option key stores the *next* token as its
	///    value (flags store their fixed boolean and consume nothing);
	/// 4. anything else fills the next positional slot.
	///
	/// Option values are taken unconditionally, so `--size --verbose` will
	/// happily store `"--verbose"` as the size if `--size` takes a value.
	/// Exact string matching only: no `-abc` bundling, no `--key=value`.
	///
	/// ## Errors
	///
	/// Returns a [`ParseError`] if a value-taking option ends the input, a
	/// token arrives after every positional slot is spent, or a value fails
	/// coercion. Fields assigned before the error keep their values.
	pub fn parse_command(self, command: &mut dyn Command) -> Result<Parsed, ParseError> {
		let Self { context, mut tokens } = self;
		let mut positionals = context.arguments().iter();
		let mut next_command = None;
		let mut end_of_options = false;

		while let Some(token) = tokens.next() {
			if ! end_of_options {
				// The end-of-options marker. Eat it and stop matching keys.
				if token == "--" {
					end_of_options = true;
					continue;
				}

				// A subcommand! The rest is its problem.
				if let Some(sub) = context.subcommands().get(token.as_str()) {
					next_command = Some(*sub);
					break;
				}

				// An option or flag.
				if let Some((key, action)) = context.options().get_key_value(token.as_str()) {
					match action.op() {
						ActionOp::Store => {
							let Some(value) = tokens.next() else {
								return Err(ParseError::MissingValue(key));
							};
							action.store(command, &value)?;
						},
						ActionOp::StoreBool(_) => action.trigger(command),
					}
					continue;
				}
			}

			// Whatever it is, it fills the next positional slot.
			match positionals.next() {
				Some(action) => action.store(command, &token)?,
				None => return Err(ParseError::UnexpectedArgument(token)),
			}
		}

		Ok(Parsed {
			next_command,
			remaining: tokens.collect(),
		})
	}
}



#[derive(Debug, Clone)]
/// # Parse Outcome.
///
/// What one pass produced: the selected subcommand, if any, and the tokens it
/// left untouched. The driver decides whether to descend.
pub struct Parsed {
	/// # Selected Subcommand.
	next_command: Option<&'static SubcommandDecl>,

	/// # Unconsumed Tokens.
	remaining: Vec<String>,
}

impl Parsed {
	#[must_use]
	/// # Selected Subcommand.
	///
	/// `None` means parsing ran the input dry without matching a subcommand
	/// name; the current command is the final one.
	pub const fn next_command(&self) -> Option<&'static SubcommandDecl> {
		self.next_command
	}

	#[must_use]
	/// # Unconsumed Tokens.
	pub fn remaining(&self) -> &[String] { &self.remaining }

	#[must_use]
	/// # Into Parts.
	pub fn into_parts(self) -> (Option<&'static SubcommandDecl>, Vec<String>) {
		(self.next_command, self.remaining)
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		coerce,
		compile_command,
		CoerceError,
		CommandSchema,
		Declaration,
		GroupSchema,
		GroupSchemaFn,
		Parameters,
	};

	#[derive(Debug)]
	/// # Group Fixture.
	struct Person {
		name: Option<String>,
		age: Option<u32>,
		alive: bool,
		quiet: bool,
	}

	impl Parameters for Person {
		fn schema() -> &'static GroupSchema {
			static PARAMS: [Declaration; 4] = [
				Declaration::argument(&["NAME"]),
				Declaration::option(&["--age", "-a"]),
				Declaration::flag(&["--alive"], false),
				Declaration::flag(&["--quiet"], true),
			];
			static SCHEMA: GroupSchema = GroupSchema::new("person", &PARAMS, &[]);
			&SCHEMA
		}

		fn group_schema(&self) -> &'static GroupSchema { Self::schema() }

		fn assign(&mut self, slot: usize, raw: &str) -> Result<(), CoerceError> {
			match slot {
				0 => { self.name = Some(coerce(raw)?); },
				1 => { self.age = Some(coerce(raw)?); },
				_ => {},
			}
			Ok(())
		}

		fn trigger(&mut self, slot: usize, value: bool) {
			match slot {
				2 => { self.alive = value; },
				3 => { self.quiet = value; },
				_ => {},
			}
		}
	}

	impl Default for Person {
		fn default() -> Self {
			Self {
				name: None,
				age: None,
				alive: false,
				quiet: true,
			}
		}
	}

	#[derive(Debug, Default)]
	/// # Childless Command Fixture.
	struct Child {
		person: Person,
	}

	impl Command for Child {
		fn schema() -> &'static CommandSchema {
			static GROUPS: [GroupSchemaFn; 1] = [Person::schema];
			static SCHEMA: CommandSchema = CommandSchema::new("child", &GROUPS, &[]);
			&SCHEMA
		}

		fn command_schema(&self) -> &'static CommandSchema { Self::schema() }

		fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
			if idx == 0 { Some(&mut self.person) }
			else { None }
		}
	}

	#[derive(Debug, Default)]
	/// # Root Command Fixture.
	struct Main {
		person: Person,
	}

	impl Command for Main {
		fn schema() -> &'static CommandSchema {
			static GROUPS: [GroupSchemaFn; 1] = [Person::schema];
			static SUBS: [SubcommandDecl; 1] = [
				SubcommandDecl::new(Child::schema, |_| Box::<Child>::default()),
			];
			static SCHEMA: CommandSchema = CommandSchema::new("main", &GROUPS, &SUBS);
			&SCHEMA
		}

		fn command_schema(&self) -> &'static CommandSchema { Self::schema() }

		fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
			if idx == 0 { Some(&mut self.person) }
			else { None }
		}
	}

	/// # Parse Tokens Against a Fresh `Main`.
	fn parse(tokens: &[&str]) -> (Main, Result<Parsed, ParseError>) {
		let mut main = Main::default();
		let compiled = compile_command(&main).expect("Compile failed.");
		let tokens: Vec<String> = tokens.iter().map(|&t| t.to_owned()).collect();
		let result = Parser::new(&compiled, tokens).parse_command(&mut main);
		(main, result)
	}

	#[test]
	fn t_option() {
		let (main, result) = parse(&["--age", "41"]);
		let parsed = result.expect("Parse failed.");

		assert_eq!(main.person.age, Some(41));
		assert!(parsed.next_command().is_none());
		assert!(parsed.remaining().is_empty());

		// The short form hits the same field.
		let (main, result) = parse(&["-a", "41"]);
		assert!(result.is_ok());
		assert_eq!(main.person.age, Some(41));
	}

	#[test]
	fn t_flag() {
		let (main, result) = parse(&["--alive"]);
		let parsed = result.expect("Parse failed.");

		// The flag flipped; nothing extra was consumed.
		assert!(main.person.alive);
		assert!(parsed.remaining().is_empty());

		// A default-true flag triggers to false.
		let (main, result) = parse(&["--quiet"]);
		assert!(result.is_ok());
		assert!(! main.person.quiet);
	}

	#[test]
	fn t_argument() {
		let (main, result) = parse(&["Mike"]);
		assert!(result.is_ok());
		assert_eq!(main.person.name.as_deref(), Some("Mike"));
	}

	#[test]
	fn t_end_of_options() {
		// The marker is discarded; what follows is positional.
		let (main, result) = parse(&["--", "Mike"]);
		let parsed = result.expect("Parse failed.");
		assert_eq!(main.person.name.as_deref(), Some("Mike"));
		assert!(parsed.remaining().is_empty());

		// Even when it would otherwise match a flag…
		let (main, result) = parse(&["--", "--alive"]);
		assert!(result.is_ok());
		assert_eq!(main.person.name.as_deref(), Some("--alive"));
		assert!(! main.person.alive);

		// …or a subcommand.
		let (main, result) = parse(&["--", "child"]);
		let parsed = result.expect("Parse failed.");
		assert_eq!(main.person.name.as_deref(), Some("child"));
		assert!(parsed.next_command().is_none());
	}

	#[test]
	fn t_subcommand() {
		let (main, result) = parse(&["child", "--age", "12"]);
		let parsed = result.expect("Parse failed.");

		// The subcommand short-circuits; Main's own fields stay untouched
		// and the rest of the tokens come back verbatim.
		let sub = parsed.next_command().expect("Subcommand expected.");
		assert_eq!(sub.name(), "child");
		assert_eq!(parsed.remaining(), ["--age", "12"]);
		assert_eq!(main.person.age, None);
		assert_eq!(main.person.name, None);
	}

	#[test]
	fn t_subcommand_mid_stream() {
		// Options before the subcommand land on the parent.
		let (main, result) = parse(&["--age", "41", "child", "Kara"]);
		let parsed = result.expect("Parse failed.");

		assert_eq!(main.person.age, Some(41));
		assert_eq!(
			parsed.next_command().map(SubcommandDecl::name),
			Some("child"),
		);
		assert_eq!(parsed.remaining(), ["Kara"]);
	}

	#[test]
	fn t_mixed() {
		let (main, result) = parse(&["Mike", "--age", "41", "--alive"]);
		assert!(result.is_ok());
		assert_eq!(main.person.name.as_deref(), Some("Mike"));
		assert_eq!(main.person.age, Some(41));
		assert!(main.person.alive);
	}

	#[test]
	fn t_repeat_last_wins() {
		let (main, result) = parse(&["--age", "41", "--age", "42"]);
		assert!(result.is_ok());
		assert_eq!(main.person.age, Some(42));
	}

	#[test]
	fn t_value_shaped_like_option() {
		// Values are consumed unconditionally, even when they look like
		// keys. (Garbage in…)
		let (main, result) = parse(&["--age", "--alive"]);
		let err = result.expect_err("Coercion should fail.");
		assert_eq!(
			err,
			ParseError::InvalidValue {
				target: "--age",
				value: "--alive".to_owned(),
				expected: "u32",
			},
		);
		assert!(! main.person.alive);
	}

	#[test]
	fn t_missing_value() {
		let (_, result) = parse(&["--age"]);
		assert_eq!(
			result.expect_err("Missing value expected."),
			ParseError::MissingValue("--age"),
		);
	}

	#[test]
	fn t_exhaustion() {
		// One declared slot, two positional tokens.
		let (main, result) = parse(&["Mike", "Extra"]);
		assert_eq!(
			result.expect_err("Exhaustion expected."),
			ParseError::UnexpectedArgument("Extra".to_owned()),
		);

		// The earlier assignment stuck; nothing rolls back.
		assert_eq!(main.person.name.as_deref(), Some("Mike"));
	}

	#[test]
	fn t_empty_input() {
		let (main, result) = parse(&[]);
		let parsed = result.expect("Parse failed.");
		assert!(parsed.next_command().is_none());
		assert!(parsed.remaining().is_empty());
		assert_eq!(main.person.name, None);
		assert!(main.person.quiet);
	}
}
