//! Deep-link rendering from per-segment URL templates.

use crate::domain::entities::{LinkTriple, SearchListId, Segment};

/// Placeholder replaced with the search list identifier by default.
pub const DEFAULT_PLACEHOLDER: &str = "REPLACE_ME";

const DEFAULT_SALES_TEMPLATE: &str = "https://app.apollo.io/#/people?page=1&personDepartmentOrSubdepartments[]=account_management&personDepartmentOrSubdepartments[]=business_development&personDepartmentOrSubdepartments[]=revenue_operations&personDepartmentOrSubdepartments[]=sales&personDepartmentOrSubdepartments[]=sales_operations&qOrganizationSearchListId=REPLACE_ME&sortAscending=false&sortByField=recommendations_score";

const DEFAULT_MARKETING_TEMPLATE: &str = "https://app.apollo.io/#/people?page=1&sortAscending=false&sortByField=recommendations_score&qOrganizationSearchListId=REPLACE_ME&personDepartmentOrSubdepartments[]=demand_generation&personDepartmentOrSubdepartments[]=ecommerce_marketing&personDepartmentOrSubdepartments[]=event_marketing&personDepartmentOrSubdepartments[]=lead_generation&personDepartmentOrSubdepartments[]=marketing&personDepartmentOrSubdepartments[]=marketing_communications&personDepartmentOrSubdepartments[]=product_marketing&personDepartmentOrSubdepartments[]=strategic_communications";

const DEFAULT_IT_TEMPLATE: &str = "https://app.apollo.io/#/people?contactEmailStatusV2[]=verified&contactEmailExcludeCatchAll=true&sortAscending=false&sortByField=recommendations_score&personDepartmentOrSubdepartments[]=information_technology_executive&personDepartmentOrSubdepartments[]=business_service_management_itsm&personDepartmentOrSubdepartments[]=enterprise_architecture&personDepartmentOrSubdepartments[]=information_security&personDepartmentOrSubdepartments[]=information_technology&personDepartmentOrSubdepartments[]=infrastructure&personDepartmentOrSubdepartments[]=it_asset_management&personDepartmentOrSubdepartments[]=it_audit_it_compliance&personDepartmentOrSubdepartments[]=it_operations&personDepartmentOrSubdepartments[]=it_procurement&personDepartmentOrSubdepartments[]=it_strategy&personNotTitles[]=Sales&personNotTitles[]=recruiting&personNotTitles[]=talent&page=1&qOrganizationSearchListId=REPLACE_ME";

/// URL templates for the three audience segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplates {
    pub sales: String,
    pub marketing: String,
    pub it: String,
}

impl LinkTemplates {
    pub fn get(&self, segment: Segment) -> &str {
        match segment {
            Segment::Sales => &self.sales,
            Segment::Marketing => &self.marketing,
            Segment::It => &self.it,
        }
    }
}

/// Apollo people-search views filtered by department for each segment.
impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            sales: DEFAULT_SALES_TEMPLATE.to_string(),
            marketing: DEFAULT_MARKETING_TEMPLATE.to_string(),
            it: DEFAULT_IT_TEMPLATE.to_string(),
        }
    }
}

/// Renders segment links for a saved search list.
///
/// The placeholder is an explicit parameter rather than a convention baked
/// into the templates, so templates can use any token.
pub struct LinkService {
    templates: LinkTemplates,
    placeholder: String,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(templates: LinkTemplates, placeholder: impl Into<String>) -> Self {
        Self {
            templates,
            placeholder: placeholder.into(),
        }
    }

    pub fn templates(&self) -> &LinkTemplates {
        &self.templates
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Substitutes the list identifier into all three templates.
    ///
    /// Every occurrence of the placeholder is replaced, not just the first.
    pub fn render(&self, list_id: &SearchListId) -> LinkTriple {
        LinkTriple {
            sales: self.render_segment(Segment::Sales, list_id),
            marketing: self.render_segment(Segment::Marketing, list_id),
            it: self.render_segment(Segment::It, list_id),
        }
    }

    /// Substitutes the list identifier into a single segment template.
    pub fn render_segment(&self, segment: Segment, list_id: &SearchListId) -> String {
        substitute(
            self.templates.get(segment),
            &self.placeholder,
            list_id.as_str(),
        )
    }
}

impl Default for LinkService {
    fn default() -> Self {
        Self::new(LinkTemplates::default(), DEFAULT_PLACEHOLDER)
    }
}

/// Replaces every occurrence of `placeholder` in `template` with `value`.
///
/// An empty placeholder leaves the template unchanged.
pub fn substitute(template: &str, placeholder: &str, value: &str) -> String {
    if placeholder.is_empty() {
        return template.to_string();
    }
    template.replace(placeholder, value)
}
