use clap::ValueEnum;

/// Sort orders accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
	Default,
	Date,
	Salary,
}

impl SortArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			SortArg::Default => "default",
			SortArg::Date => "date",
			SortArg::Salary => "salary",
		}
	}
}

/// Start views accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ViewArg {
	List,
	Map,
}

impl ViewArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ViewArg::List => "list",
			ViewArg::Map => "map",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
