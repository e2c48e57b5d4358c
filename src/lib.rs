/*!
# Paisley

This crate provides a small, declarative CLI grammar engine. You describe
commands, options, flags, positional arguments, and nested parameter groups
as typed containers with one-time registered schemas; the engine compiles the
declarations into a flat lookup namespace — rejecting duplicate names up
front, where they belong — and then parses the argument list against it,
writing values straight into your fields and telling you which subcommand, if
any, should run next.

There are no derive macros and no runtime dependencies. Registration is plain
Rust: a `static` schema per type, built from `const fn` builders, paired with
a couple of small trait methods. The declaration boilerplate is yours to see
and to grep.

Matching is exact-string only: no combined short flags (`-abc`), no
`--key=value` splitting, no prefix abbreviation. The literal `--` ends option
matching; everything after it is positional.

## Example

```
use paisley::{
    coerce, CoerceError, Command, CommandSchema, Context, Declaration,
    GroupSchema, GroupSchemaFn, Parameters,
};

/// # Who Are We Talking About?
#[derive(Debug, Default)]
struct Person {
    name: Option<String>,
    age: Option<u32>,
    alive: bool,
}

impl Parameters for Person {
    fn schema() -> &'static GroupSchema {
        static PARAMS: [Declaration; 3] = [
            Declaration::argument(&["NAME"]).with_help("A person's name."),
            Declaration::option(&["--age", "-a"]).with_help("A person's age."),
            Declaration::flag(&["--alive"], false).with_help("Still with us."),
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
        if slot == 2 { self.alive = value; }
    }
}

/// # The Root Command.
#[derive(Debug, Default)]
struct Main {
    person: Person,
}

impl Command for Main {
    fn schema() -> &'static CommandSchema {
        static GROUPS: [GroupSchemaFn; 1] = [Person::schema];
        static SCHEMA: CommandSchema = CommandSchema::new("main", &GROUPS, &[]);
        &SCHEMA
    }

    fn command_schema(&self) -> &'static CommandSchema { Self::schema() }

    fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
        if idx == 0 { Some(&mut self.person) }
        else { None }
    }

    fn invoke(&mut self, _context: &mut Context) {
        // Do your thing! The fields are populated by now.
    }
}

// The low-level way: compile and parse one command yourself.
let mut main = Main::default();
let compiled = paisley::compile_command(&main).unwrap();
let tokens = vec!["Mike".to_owned(), "--age".to_owned(), "41".to_owned()];
let parsed = paisley::Parser::new(&compiled, tokens)
    .parse_command(&mut main)
    .unwrap();

assert_eq!(main.person.name.as_deref(), Some("Mike"));
assert_eq!(main.person.age, Some(41));
assert!(parsed.next_command().is_none());

// The high-level way: let `paisley::App` loop compile/parse/invoke down
// the subcommand chain. (That one reads the process arguments.)
// paisley::App::new().run(Box::new(Main::default()));
```

For nesting, parameter groups may contain other parameter groups (composition
over inheritance: reuse a group by embedding it), and commands may declare
subcommands. Parsing stops at the first subcommand token; the driver
constructs it — lazily, with the shared [`Context`] — and parses the
leftover tokens against it.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod app;
mod command;
mod compiler;
mod error;
mod params;
mod parser;

pub use app::{
	App,
	Context,
};
pub use command::{
	Command,
	CommandSchema,
	CommandSchemaFn,
	ConstructFn,
	SubcommandDecl,
};
pub use compiler::{
	CommandParserContext,
	MutationAction,
	compile_command,
};
pub use error::{
	AppError,
	CoerceError,
	CollisionError,
	ParseError,
};
pub use params::{
	Declaration,
	GroupSchema,
	GroupSchemaFn,
	ParamKind,
	Parameters,
	coerce,
};
pub use parser::{
	Parsed,
	Parser,
};
