//! Per-variant field tables built from the catalog.

use std::collections::HashMap;
use std::sync::LazyLock;

use pgtd_model::{FieldKey, FieldSpec, RequirementRule, RuleVariant};

use crate::catalog::{Condition, FieldDef, fields_for};
use crate::error::{Result, StandardsError};

static SHANGHAI_TABLE: LazyLock<FieldTable> = LazyLock::new(|| {
    FieldTable::build(RuleVariant::Shanghai).expect("Shanghai catalog is inconsistent")
});

static SHENZHEN_TABLE: LazyLock<FieldTable> = LazyLock::new(|| {
    FieldTable::build(RuleVariant::Shenzhen).expect("Shenzhen catalog is inconsistent")
});

/// Shared, lazily built table for `variant`.
pub fn field_table(variant: RuleVariant) -> &'static FieldTable {
    match variant {
        RuleVariant::Shanghai => &SHANGHAI_TABLE,
        RuleVariant::Shenzhen => &SHENZHEN_TABLE,
    }
}

/// Ordered field specifications for one variant.
///
/// Indices are dense and contiguous from 0; `by_key` gives O(1) lookup of a
/// column by its canonical key.
#[derive(Debug, Clone)]
pub struct FieldTable {
    variant: RuleVariant,
    fields: Vec<FieldSpec>,
    by_key: HashMap<FieldKey, usize>,
}

impl FieldTable {
    /// Build the table for `variant`, resolving every requirement condition
    /// to the column indices of that variant.
    pub fn build(variant: RuleVariant) -> Result<Self> {
        let defs: Vec<&FieldDef> = fields_for(variant).collect();

        let mut by_key = HashMap::with_capacity(defs.len());
        for (index, def) in defs.iter().enumerate() {
            if by_key.insert(def.key, index).is_some() {
                return Err(StandardsError::DuplicateField {
                    variant,
                    field: def.key,
                });
            }
        }

        if defs.len() != variant.column_count() {
            return Err(StandardsError::ColumnCount {
                variant,
                expected: variant.column_count(),
                actual: defs.len(),
            });
        }

        let fields = defs
            .iter()
            .enumerate()
            .map(|(index, def)| {
                let requirement = def
                    .condition
                    .map(|condition| resolve(variant, def.key, condition, &by_key))
                    .transpose()?;
                Ok(FieldSpec {
                    index,
                    key: def.key,
                    local_name: def.local_name(variant),
                    max_length: def.max_length,
                    always_required: def.required,
                    requirement,
                    allowed_values: def.allowed_values,
                    multi_value: def.multi_value,
                    max_multi_count: def.max_multi_count,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(%variant, columns = fields.len(), "built field table");

        Ok(Self {
            variant,
            fields,
            by_key,
        })
    }

    pub fn variant(&self) -> RuleVariant {
        self.variant
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    pub fn index_of(&self, key: FieldKey) -> Option<usize> {
        self.by_key.get(&key).copied()
    }

    /// Spec for `key`, if the variant carries that column.
    pub fn spec(&self, key: FieldKey) -> Option<&FieldSpec> {
        self.index_of(key).and_then(|index| self.fields.get(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldSpec> {
        self.fields.iter()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

impl<'a> IntoIterator for &'a FieldTable {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn resolve(
    variant: RuleVariant,
    field: FieldKey,
    condition: Condition,
    by_key: &HashMap<FieldKey, usize>,
) -> Result<RequirementRule> {
    let index = |dependency: FieldKey| {
        by_key
            .get(&dependency)
            .copied()
            .ok_or(StandardsError::MissingDependency {
                variant,
                field,
                dependency,
            })
    };

    let rule = match condition {
        Condition::FirstOrChange => RequirementRule::ReportTypeIn {
            report_type: index(FieldKey::ReportType)?,
        },
        Condition::OptionSelected { field, option } => RequirementRule::OptionSelected {
            field: index(field)?,
            option,
        },
        Condition::ValueEquals { field, value } => RequirementRule::ValueEquals {
            field: index(field)?,
            value,
        },
        Condition::ValuePresent { field } => RequirementRule::ValuePresent {
            field: index(field)?,
        },
        Condition::HighFrequencyUnexempt => RequirementRule::HighFrequencyUnexempt {
            report_type: index(FieldKey::ReportType)?,
            order_rate: index(FieldKey::MaxOrderRate)?,
            daily_orders: index(FieldKey::MaxDailyOrders)?,
            upload: index(FieldKey::UploadTestReport)?,
        },
        Condition::HighFrequencyWithoutUpload => RequirementRule::HighFrequencyWithoutUpload {
            report_type: index(FieldKey::ReportType)?,
            order_rate: index(FieldKey::MaxOrderRate)?,
            daily_orders: index(FieldKey::MaxDailyOrders)?,
            upload: index(FieldKey::UploadTestReport)?,
        },
    };
    Ok(rule)
}
