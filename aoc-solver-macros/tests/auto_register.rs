use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2015, day = 7, tags = ["macro-test", "echo"])]
struct EchoSolver;

impl AocParser for EchoSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for EchoSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn test_plugin_is_submitted_with_tags() {
    let plugin = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .find(|plugin| plugin.year == 2015 && plugin.day == 7)
        .expect("plugin was not submitted");
    assert_eq!(plugin.tags, &["macro-test", "echo"]);
    assert_eq!(plugin.solver.parts(), 1);
}

#[test]
fn test_tag_filtered_registration_creates_solver() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .expect("registration failed")
        .build();

    let info = registry.storage().get_info(2015, 7).expect("not registered");
    assert_eq!(info.parts, 1);

    let mut solver = registry.create_solver(2015, 7, "  grid \n").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "dirg");
    assert!(solver.solve(2).is_err());
}

#[test]
fn test_filter_excludes_untagged_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(registry.storage().is_empty());
}
