/*!
# Paisley: Git-Shaped Demo.

A pretend `git` showing subcommand descent. Try it with:

```text
cargo run --example git -- branch --list
cargo run --example git -- checkout -b feature/paisley
cargo run --example git -- commit -m "Mean it this time." --amend
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
	SubcommandDecl,
};



#[derive(Debug, Default)]
/// # Branch Options.
struct BranchParams {
	/// # Branch Name.
	branch: Option<String>,

	/// # List Mode.
	list: bool,
}

impl Parameters for BranchParams {
	fn schema() -> &'static GroupSchema {
		static PARAMS: [Declaration; 2] = [
			Declaration::argument(&["BRANCH_NAME"]).with_help("The branch to create."),
			Declaration::flag(&["--list", "-l"], false).with_help("List branches instead."),
		];
		static SCHEMA: GroupSchema = GroupSchema::new("branch-params", &PARAMS, &[]);
		&SCHEMA
	}

	fn group_schema(&self) -> &'static GroupSchema { Self::schema() }

	fn assign(&mut self, slot: usize, raw: &str) -> Result<(), CoerceError> {
		if slot == 0 { self.branch = Some(coerce(raw)?); }
		Ok(())
	}

	fn trigger(&mut self, slot: usize, value: bool) {
		if slot == 1 { self.list = value; }
	}
}



#[derive(Debug, Default)]
/// # Branch.
struct Branch {
	/// # Options.
	params: BranchParams,
}

impl Command for Branch {
	fn schema() -> &'static CommandSchema {
		static GROUPS: [GroupSchemaFn; 1] = [BranchParams::schema];
		static SCHEMA: CommandSchema = CommandSchema::new("branch", &GROUPS, &[]);
		&SCHEMA
	}

	fn command_schema(&self) -> &'static CommandSchema { Self::schema() }

	fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
		if idx == 0 { Some(&mut self.params) }
		else { None }
	}

	fn invoke(&mut self, _context: &mut Context) {
		if self.params.list { println!("Listing all the branches."); }
		else {
			match self.params.branch.as_deref() {
				Some(branch) => println!("Creating branch {branch}."),
				None => println!("Showing the current branch."),
			}
		}
	}
}



#[derive(Debug, Default)]
/// # Checkout Options.
struct CheckoutParams {
	/// # Branch Name.
	branch: Option<String>,

	/// # Create First?
	new_branch: bool,
}

impl Parameters for CheckoutParams {
	fn schema() -> &'static GroupSchema {
		static PARAMS: [Declaration; 2] = [
			Declaration::argument(&["BRANCH"]).with_help("The branch to switch to."),
			Declaration::flag(&["-b"], false).with_help("Create it first."),
		];
		static SCHEMA: GroupSchema = GroupSchema::new("checkout-params", &PARAMS, &[]);
		&SCHEMA
	}

	fn group_schema(&self) -> &'static GroupSchema { Self::schema() }

	fn assign(&mut self, slot: usize, raw: &str) -> Result<(), CoerceError> {
		if slot == 0 { self.branch = Some(coerce(raw)?); }
		Ok(())
	}

	fn trigger(&mut self, slot: usize, value: bool) {
		if slot == 1 { self.new_branch = value; }
	}
}



#[derive(Debug, Default)]
/// # Checkout.
struct Checkout {
	/// # Options.
	params: CheckoutParams,
}

impl Command for Checkout {
	fn schema() -> &'static CommandSchema {
		static GROUPS: [GroupSchemaFn; 1] = [CheckoutParams::schema];
		static SCHEMA: CommandSchema = CommandSchema::new("checkout", &GROUPS, &[]);
		&SCHEMA
	}

	fn command_schema(&self) -> &'static CommandSchema { Self::schema() }

	fn group_mut(&mut self, idx: usize) -> Option<&mut dyn Parameters> {
		if idx == 0 { Some(&mut self.params) }
		else { None }
	}

	fn invoke(&mut self, context: &mut Context) {
		let Some(branch) = self.params.branch.as_deref() else {
			eprintln!("Checkout needs a branch name.");
			context.set_exit_code(1);
			return;
		};

		if self.params.new_branch { println!("Creating and checking out {branch}."); }
		else { println!("Checking out existing branch {branch}."); }
	}
}



#[derive(Debug, Default)]
/// # Commit Options.
struct CommitParams {
	/// # Message.
	message: Option<String>,

	/// # Amend Mode.
	amend: bool,

	/// # Squash Mode.
	squash: bool,
}

impl Parameters for CommitParams {
	fn schema() -> &'static GroupSchema {
		static PARAMS: [Declaration; 3] = [
			Declaration::option(&["-m", "--message"]).with_help("The commit message."),
			Declaration::flag(&["--amend"], false).with_help("Rewrite the last commit."),
			Declaration::flag(&["--squash"], false).with_help("Squash into one."),
		];
		static SCHEMA: GroupSchema = GroupSchema::new("commit-params", &PARAMS, &[]);
		&SCHEMA
	}

	fn group_schema(&self) -> &'static GroupSchema { Self::schema() }

	fn assign(&mut self, slot: usize, raw: &str) -> Result<(), CoerceError> {
		if slot == 0 { self.message = Some(coerce(raw)?); }
		Ok(())
	}

	fn trigger(&mut self, slot: usize, value: bool) {
		match slot {
			1 => { self.amend = value; },
			2 => { self.squash = value; },
			_ => {},
		}
	}
}



#[derive(Debug, Default)]
/// # Commit.
struct Commit {
	/// # Options.
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

	fn invoke(&mut self, _context: &mut Context) {
		let message = self.params.message.as_deref().unwrap_or("(no message)");
		if self.params.squash { println!("Squash-committing: {message}"); }
		else if self.params.amend { println!("Amending: {message}"); }
		else { println!("Committing: {message}"); }
	}
}



#[derive(Debug, Default)]
/// # The Root.
struct Main;

impl Command for Main {
	fn schema() -> &'static CommandSchema {
		static SUBS: [SubcommandDecl; 3] = [
			SubcommandDecl::new(Branch::schema, |_| Box::<Branch>::default()),
			SubcommandDecl::new(Checkout::schema, |_| Box::<Checkout>::default()),
			SubcommandDecl::new(Commit::schema, |_| Box::<Commit>::default()),
		];
		static SCHEMA: CommandSchema = CommandSchema::new("git", &[], &SUBS);
		&SCHEMA
	}

	fn command_schema(&self) -> &'static CommandSchema { Self::schema() }
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
