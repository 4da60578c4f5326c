//! Problem Service - listing and describing problems.

use crate::{
    application::ports::{ProblemStore, TemplateRenderer, TemplateStore},
    domain::{DESCRIPTION_TEMPLATE, DomainError, Problem, RenderContext},
    error::EulerResult,
};

/// Attribute to sort the problem list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Difficulty,
}

/// Read-side queries over the problem store.
pub struct ProblemService {
    problems: Box<dyn ProblemStore>,
}

impl ProblemService {
    pub fn new(problems: Box<dyn ProblemStore>) -> Self {
        Self { problems }
    }

    /// Look up a problem, turning absence into an error for the caller.
    pub fn get(&self, id: i64) -> EulerResult<Problem> {
        self.problems
            .get(id)
            .ok_or_else(|| DomainError::ProblemNotFound { id }.into())
    }

    /// All problems, stably sorted by `key`.
    pub fn list(&self, key: SortKey) -> Vec<Problem> {
        let mut problems = self.problems.list();
        match key {
            SortKey::Id => problems.sort_by_key(|p| p.id),
            SortKey::Difficulty => problems.sort_by_key(|p| p.difficulty),
        }
        problems
    }

    /// Render the description template for `problem`.
    pub fn describe(
        &self,
        problem: &Problem,
        templates: &dyn TemplateStore,
        renderer: &dyn TemplateRenderer,
    ) -> EulerResult<String> {
        let template = templates.get(DESCRIPTION_TEMPLATE)?;
        renderer.render(&template, &RenderContext::for_problem(problem))
    }
}

/// `Problem <id>: <name>`, with the framed description when `long`.
pub fn list_entry(problem: &Problem, long: bool) -> String {
    const RULE: &str = "=========================================";

    let mut entry = problem.to_string();
    if long {
        entry.push('\n');
        entry.push_str(RULE);
        entry.push_str("\n\n");
        entry.push_str(&problem.description);
        entry.push_str("\n\n");
        entry.push_str(RULE);
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockProblemStore;
    use crate::domain::Difficulty;

    fn p(id: u32, difficulty: i64) -> Problem {
        Problem {
            id,
            name: format!("P{id}"),
            description: format!("Description {id}"),
            difficulty: Difficulty::new(difficulty).unwrap(),
            answer: "0".into(),
            resources: vec![],
        }
    }

    fn service() -> ProblemService {
        let mut store = MockProblemStore::new();
        store
            .expect_list()
            .returning(|| vec![p(1, 10), p(2, 5), p(3, 10), p(4, 5)]);
        store
            .expect_get()
            .returning(|id| if id == 2 { Some(p(2, 5)) } else { None });
        ProblemService::new(Box::new(store))
    }

    #[test]
    fn sort_by_difficulty_is_stable() {
        let ids: Vec<u32> = service()
            .list(SortKey::Difficulty)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn sort_by_id() {
        let ids: Vec<u32> = service().list(SortKey::Id).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn missing_problem_is_not_found_error() {
        let err = service().get(9999).unwrap_err();
        assert_eq!(err.to_string(), "A problem with ID 9999 does not exist");
        assert!(service().get(2).is_ok());
    }

    #[test]
    fn long_entry_frames_description() {
        let entry = list_entry(&p(3, 5), true);
        assert!(entry.starts_with("Problem 3: P3\n====="));
        assert!(entry.contains("\n\nDescription 3\n\n"));
        assert_eq!(list_entry(&p(3, 5), false), "Problem 3: P3");
    }
}
