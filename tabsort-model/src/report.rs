//! Minimal report object model: attributes, the nested group chain and
//! subreports. Only what sort-order preprocessing needs to walk.

use crate::attributes::{AttributeKey, CORE_NAMESPACE, DataAttributes};
use crate::constraint::SortConstraint;
use crate::value::Value;
use std::sync::Arc;

/// Core attribute enabling automatic sort-order derivation from groups.
pub const AUTO_SORT: &str = "auto-sort";

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    name: String,
    attributes: DataAttributes,
    root_group: Group,
    subreports: Vec<Report>,
    computed_sort_constraints: Option<Arc<[SortConstraint]>>,
}

impl Report {
    pub fn new(name: impl Into<String>, root_group: Group) -> Self {
        Self {
            name: name.into(),
            attributes: DataAttributes::new(),
            root_group,
            subreports: Vec::new(),
            computed_sort_constraints: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_attribute(
        mut self,
        key: AttributeKey,
        value: impl Into<Value>,
    ) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn set_attribute(&mut self, key: AttributeKey, value: impl Into<Value>) {
        self.attributes.insert(key, value);
    }

    pub fn attribute(&self, namespace: &str, name: &str) -> Option<&Value> {
        self.attributes.get(namespace, name)
    }

    pub fn attributes(&self) -> &DataAttributes {
        &self.attributes
    }

    /// Raw `auto-sort` attribute; callers decide how strictly to read it.
    pub fn auto_sort(&self) -> Option<&Value> {
        self.attribute(CORE_NAMESPACE, AUTO_SORT)
    }

    pub fn with_auto_sort(self, enabled: bool) -> Self {
        self.with_attribute(AttributeKey::core(AUTO_SORT), enabled)
    }

    pub fn root_group(&self) -> &Group {
        &self.root_group
    }

    pub fn subreports(&self) -> &[Report] {
        &self.subreports
    }

    pub fn with_subreport(mut self, subreport: Report) -> Self {
        self.subreports.push(subreport);
        self
    }

    /// Detaches the subreports so they can be processed by value and put back
    /// with [`Report::set_subreports`].
    pub fn take_subreports(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.subreports)
    }

    pub fn set_subreports(&mut self, subreports: Vec<Report>) {
        self.subreports = subreports;
    }

    /// Constraint list derived from the group chain, if preprocessing ran.
    pub fn computed_sort_constraints(&self) -> Option<&[SortConstraint]> {
        self.computed_sort_constraints.as_deref()
    }

    pub fn set_computed_sort_constraints(
        &mut self,
        constraints: Vec<SortConstraint>,
    ) {
        self.computed_sort_constraints = Some(Arc::from(constraints));
    }
}

/// A grouping level with its own declared sort keys.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    name: Option<String>,
    sort_constraints: Vec<SortConstraint>,
    body: GroupBody,
}

impl Group {
    /// A group whose body is the item-level data band.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_sort_constraint(mut self, constraint: SortConstraint) -> Self {
        self.sort_constraints.push(constraint);
        self
    }

    pub fn with_sort_constraints(
        mut self,
        constraints: impl IntoIterator<Item = SortConstraint>,
    ) -> Self {
        self.sort_constraints.extend(constraints);
        self
    }

    pub fn with_sub_group(mut self, group: Group) -> Self {
        self.body = GroupBody::SubGroup(Box::new(group));
        self
    }

    pub fn with_data_band(mut self, band: ItemBand) -> Self {
        self.body = GroupBody::Data(band);
        self
    }

    pub fn sort_constraints(&self) -> &[SortConstraint] {
        &self.sort_constraints
    }

    pub fn body(&self) -> &GroupBody {
        &self.body
    }

    pub fn sub_group(&self) -> Option<&Group> {
        match &self.body {
            GroupBody::SubGroup(group) => Some(group),
            GroupBody::Data(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupBody {
    SubGroup(Box<Group>),
    Data(ItemBand),
}

impl Default for GroupBody {
    fn default() -> Self {
        GroupBody::Data(ItemBand::default())
    }
}

/// Item-level detail band. Rendered per data row; carries no sort keys.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBand {
    pub name: Option<String>,
}
