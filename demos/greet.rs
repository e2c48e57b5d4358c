/*!
# Paisley: Greeter Demo.

The classic introduce-yourself example. Try it with:

```text
cargo run --example greet -- Mike --age 41
cargo run --example greet -- --age 41 -- --weird-name--
```
*/

use paisley::{
	App,
	coerce,
	CoerceError,
	Command,
	CommandSchema,
	Context,
	Declaration,
	GroupSchema,
	GroupSchemaFn,
	Parameters,
};



#[derive(Debug, Default)]
/// # Person Details.
struct Person {
	/// # Name.
	name: Option<String>,

	/// # Age.
	age: Option<u32>,
}

impl Parameters for Person {
	fn schema() -> &'static GroupSchema {
		static PARAMS: [Declaration; 2] = [
			Declaration::argument(&["NAME"]).with_help("A person's name."),
			Declaration::option(&["--age", "-a"]).with_help("A person's age."),
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
}



#[derive(Debug, Default)]
/// # The One and Only Command.
struct Main {
	/// # Person Details.
	person: Person,
}

impl Command for Main {
	fn schema() -> &'static CommandSchema {
		static GROUPS: [GroupSchemaFn; 1] = [Person::schema];
		static SCHEMA: CommandSchema = CommandSchema::new("greet", &GROUPS, &[]);
		&SCHEMA
	}

	fn command_schema(&self) -> &'static CommandSchema { Self::schema() }

	fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
		if idx == 0 { Some(&mut self.person) }
		else { None }
	}

	fn invoke(&mut self, _context: &mut Context) {
		let name = self.person.name.as_deref().unwrap_or("Nobody");
		match self.person.age {
			Some(age) => println!("My name is {name} and I am {age} years old."),
			None => println!("My name is {name} and my age is a mystery."),
		}
	}
}



/// # Main.
fn main() {
	match App::new().run(Box::<Main>::default()) {
		Ok(context) => std::process::exit(context.exit_code()),
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(e.exit_code());
		},
	}
}
