//! Query engine: aggregate and multi-key lookups over the registry

use crate::error::{RegistryError, Result};
use crate::index::normalize_range;
use crate::MemoryRegistry;
use atrium_domain::ordering::{
    confidentiality_order, keyword_match_order, outsourced_match_order, workaholic_order,
};
use atrium_domain::{Employee, InHouseProject, OutsourcedProject, Project};
use tracing::debug;

/// Number of employees returned by [`MemoryRegistry::top_workaholics`]
pub const WORKAHOLIC_LIMIT: usize = 3;

/// Projects registered under one keyword, split by kind
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatches<'a> {
    /// In-house matches: newest ledger date, more revisions, then id
    pub in_house: Vec<&'a InHouseProject>,

    /// Outsourced matches: id ascending
    pub outsourced: Vec<&'a OutsourcedProject>,
}

/// The pair of employees sharing the most in-house teams
#[derive(Debug, Clone, PartialEq)]
pub struct CommonPair<'a> {
    /// First employee of the pair
    pub first: &'a Employee,

    /// Second employee of the pair
    pub second: &'a Employee,

    /// In-house teams both sit on
    pub shared: usize,
}

impl MemoryRegistry {
    fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.project_slots.get(id).map(|&slot| &self.projects[slot])
    }

    /// Projects whose keyword string contains `keyword` as a token
    ///
    /// Fails only when neither kind has the keyword; one empty side is
    /// returned as an empty list.
    pub fn list_by_keyword(&self, keyword: &str) -> Result<KeywordMatches<'_>> {
        if !self.in_house_keywords.contains(keyword) && !self.outsourced_keywords.contains(keyword) {
            return Err(RegistryError::NoMatchForKeyword(keyword.to_string()));
        }

        let mut in_house: Vec<&InHouseProject> = self
            .in_house_keywords
            .lookup(keyword)
            .iter()
            .filter_map(|id| self.project_by_id(id))
            .filter_map(Project::as_in_house)
            .collect();
        in_house.sort_by(|a, b| keyword_match_order(a, b));

        let mut outsourced: Vec<&OutsourcedProject> = self
            .outsourced_keywords
            .lookup(keyword)
            .iter()
            .filter_map(|id| self.project_by_id(id))
            .filter_map(Project::as_outsourced)
            .collect();
        outsourced.sort_by(|a, b| outsourced_match_order(a, b));

        debug!(
            "Keyword '{}' matched {} in-house and {} outsourced projects",
            keyword,
            in_house.len(),
            outsourced.len()
        );
        Ok(KeywordMatches { in_house, outsourced })
    }

    /// In-house projects with a confidentiality level in `[lower, upper]`
    ///
    /// Reversed bounds are swapped first. Sorted by id.
    pub fn list_by_confidentiality(&self, lower: u32, upper: u32) -> Result<Vec<&InHouseProject>> {
        let (lower, upper) = normalize_range(lower, upper);
        let mut projects: Vec<&InHouseProject> = self
            .confidentiality
            .range(lower, upper)
            .into_iter()
            .filter_map(|id| self.project_by_id(id))
            .filter_map(Project::as_in_house)
            .collect();
        if projects.is_empty() {
            return Err(RegistryError::NoProjectInRange { lower, upper });
        }

        projects.sort_by(|a, b| confidentiality_order(a, b));
        debug!("Levels {}..={} hold {} projects", lower, upper, projects.len());
        Ok(projects)
    }

    /// Up to three employees with the most revisions
    ///
    /// Employees without any revision are never ranked.
    pub fn top_workaholics(&self) -> Result<Vec<&Employee>> {
        let mut active: Vec<&Employee> = self
            .employees
            .values()
            .filter(|e| e.num_revisions() > 0)
            .collect();
        if active.is_empty() {
            return Err(RegistryError::NoActivity);
        }

        active.sort_by(|a, b| workaholic_order(a, b));
        active.truncate(WORKAHOLIC_LIMIT);
        Ok(active)
    }

    /// Number of in-house teams both employees sit on
    ///
    /// An employee never shares a project with itself. Owning a project is
    /// not membership, so a manager shares nothing with their own team.
    pub fn shared_projects(&self, a: &Employee, b: &Employee) -> usize {
        if a.username() == b.username() {
            return 0;
        }
        a.memberships()
            .filter_map(|id| self.project_by_id(id))
            .filter_map(Project::as_in_house)
            .filter(|p| p.has_member(a.username()) && p.has_member(b.username()))
            .count()
    }

    /// The pair of employees sharing the most in-house teams
    ///
    /// Pairs `(i, j)` with `i < j` are scanned in username order. A strictly
    /// larger count replaces the best pair. On a tie with the current
    /// non-zero best, `first` is replaced when the candidate's first sorts
    /// before it; otherwise, when the candidate's first equals it, `second`
    /// is replaced when the candidate's second sorts before it.
    pub fn max_common_pair(&self) -> Result<CommonPair<'_>> {
        let employees: Vec<&Employee> = self.employees.values().collect();
        let mut record = 0;
        let mut best: Option<(&Employee, &Employee)> = None;

        for (i, &current) in employees.iter().enumerate() {
            for &candidate in &employees[i + 1..] {
                let shared = self.shared_projects(current, candidate);
                if shared > record {
                    record = shared;
                    best = Some((current, candidate));
                } else if shared == record && record != 0 {
                    if let Some((first, second)) = best.as_mut() {
                        if current.username() < first.username() {
                            *first = current;
                        } else if current.username() == first.username()
                            && candidate.username() < second.username()
                        {
                            *second = candidate;
                        }
                    }
                }
            }
        }

        let (first, second) = best.ok_or(RegistryError::NoCommonProjects)?;
        let shared = self.shared_projects(first, second);
        debug!(
            "Most common projects: '{}' and '{}' share {}",
            first.username(),
            second.username(),
            shared
        );
        Ok(CommonPair { first, second, shared })
    }
}
