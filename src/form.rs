//! Create/Edit Forms
//!
//! One form state for both entity kinds. The view collects a [`FormInput`],
//! and [`FormState::build`] turns it into the backend mutation or a
//! validation error.

use crate::error::FormError;
use crate::models::{Item, ItemPayload, Location, LocationPayload};
use crate::paths::{location_options, LocationOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Location,
    Item,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Location => "location",
            EntityKind::Item => "item",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    Edit,
}

/// An open form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub action: FormAction,
    pub entity: EntityKind,
    /// Entity being edited
    pub target_id: Option<u32>,
    /// "Create here" context; navigation returns to it after a create
    pub default_location: Option<u32>,
    /// Pre-filled name
    pub name: String,
    /// Pre-selected parent (location form) or location (item form)
    pub location: Option<u32>,
    /// Menu entries, sorted by path. Never contains the edited location's subtree.
    pub options: Vec<LocationOption>,
}

/// What the user entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub name: String,
    pub location: Option<u32>,
}

/// A validated backend write
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateLocation(LocationPayload),
    UpdateLocation(u32, LocationPayload),
    CreateItem(ItemPayload),
    UpdateItem(u32, ItemPayload),
}

impl Mutation {
    pub fn entity(&self) -> EntityKind {
        match self {
            Mutation::CreateLocation(_) | Mutation::UpdateLocation(..) => EntityKind::Location,
            Mutation::CreateItem(_) | Mutation::UpdateItem(..) => EntityKind::Item,
        }
    }

    pub fn success_notice(&self) -> &'static str {
        match self {
            Mutation::CreateLocation(_) => "Location created",
            Mutation::UpdateLocation(..) => "Location updated",
            Mutation::CreateItem(_) => "Item created",
            Mutation::UpdateItem(..) => "Item updated",
        }
    }
}

impl FormState {
    pub fn create(entity: EntityKind, default_location: Option<u32>, locations: &[Location]) -> Self {
        Self {
            action: FormAction::Create,
            entity,
            target_id: None,
            default_location,
            name: String::new(),
            location: default_location,
            options: location_options(locations, None),
        }
    }

    pub fn edit_location(location: &Location, locations: &[Location]) -> Self {
        Self {
            action: FormAction::Edit,
            entity: EntityKind::Location,
            target_id: Some(location.id),
            default_location: None,
            name: location.name.clone(),
            location: location.parent_id,
            options: location_options(locations, Some(location.id)),
        }
    }

    pub fn edit_item(item: &Item, locations: &[Location]) -> Self {
        Self {
            action: FormAction::Edit,
            entity: EntityKind::Item,
            target_id: Some(item.id),
            default_location: None,
            name: item.name.clone(),
            location: Some(item.location_id),
            options: location_options(locations, None),
        }
    }

    pub fn title(&self) -> String {
        let verb = match self.action {
            FormAction::Create => "New",
            FormAction::Edit => "Edit",
        };
        format!("{} {}", verb, self.entity.label())
    }

    /// Location to navigate back to after a successful create
    pub fn return_to(&self) -> Option<u32> {
        match self.action {
            FormAction::Create => self.default_location,
            FormAction::Edit => None,
        }
    }

    pub fn build(&self, input: &FormInput) -> Result<Mutation, FormError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }
        let name = name.to_string();

        match self.entity {
            EntityKind::Location => {
                let payload = LocationPayload { name, parent_id: input.location };
                match self.action {
                    FormAction::Create => Ok(Mutation::CreateLocation(payload)),
                    FormAction::Edit => {
                        let id = self.target_id.ok_or(FormError::NoSelection)?;
                        Ok(Mutation::UpdateLocation(id, payload))
                    }
                }
            }
            EntityKind::Item => {
                let location_id = input.location.ok_or(FormError::LocationRequired)?;
                let payload = ItemPayload { name, location_id };
                match self.action {
                    FormAction::Create => Ok(Mutation::CreateItem(payload)),
                    FormAction::Edit => {
                        let id = self.target_id.ok_or(FormError::NoSelection)?;
                        Ok(Mutation::UpdateItem(id, payload))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::tests::{house, make_location};
    use chrono::Utc;

    fn input(name: &str, location: Option<u32>) -> FormInput {
        FormInput { name: name.to_string(), location }
    }

    fn make_item(id: u32, name: &str, location_id: u32) -> Item {
        let at = Utc::now();
        Item { id, name: name.to_string(), location_id, created_at: at, updated_at: at }
    }

    #[test]
    fn test_item_name_required() {
        let form = FormState::create(EntityKind::Item, Some(1), &house());
        assert_eq!(form.build(&input("", Some(1))), Err(FormError::NameRequired));
        assert_eq!(form.build(&input("  \t ", Some(1))), Err(FormError::NameRequired));
    }

    #[test]
    fn test_item_location_required() {
        let form = FormState::create(EntityKind::Item, None, &house());
        assert_eq!(form.build(&input("Torch", None)), Err(FormError::LocationRequired));
    }

    #[test]
    fn test_create_item_trims_name() {
        let form = FormState::create(EntityKind::Item, Some(3), &house());
        assert_eq!(form.location, Some(3));
        assert_eq!(
            form.build(&input("  Torch ", Some(3))),
            Ok(Mutation::CreateItem(ItemPayload { name: "Torch".into(), location_id: 3 }))
        );
        assert_eq!(form.return_to(), Some(3));
        assert_eq!(form.title(), "New item");
    }

    #[test]
    fn test_root_location_has_no_parent() {
        let form = FormState::create(EntityKind::Location, None, &house());
        assert_eq!(
            form.build(&input("Garage", None)),
            Ok(Mutation::CreateLocation(LocationPayload { name: "Garage".into(), parent_id: None }))
        );
        assert_eq!(form.return_to(), None);
    }

    #[test]
    fn test_edit_location_prefills_and_excludes_subtree() {
        let mut locs = house();
        locs.push(make_location(4, "Garage", None));
        let kitchen = locs[1].clone();
        let form = FormState::edit_location(&kitchen, &locs);

        assert_eq!(form.name, "Kitchen");
        assert_eq!(form.location, Some(1));
        assert_eq!(form.title(), "Edit location");
        let ids: Vec<u32> = form.options.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![4, 1]);
        assert_eq!(
            form.build(&input("Kitchen", Some(4))),
            Ok(Mutation::UpdateLocation(2, LocationPayload { name: "Kitchen".into(), parent_id: Some(4) }))
        );
        assert_eq!(form.return_to(), None);
    }

    #[test]
    fn test_edit_item() {
        let item = make_item(8, "Whisk", 3);
        let form = FormState::edit_item(&item, &house());
        assert_eq!(form.location, Some(3));
        assert_eq!(form.options.len(), 3);
        let mutation = form.build(&input("Balloon whisk", Some(2))).unwrap();
        assert_eq!(mutation.entity(), EntityKind::Item);
        assert_eq!(mutation.success_notice(), "Item updated");
        assert_eq!(mutation, Mutation::UpdateItem(8, ItemPayload { name: "Balloon whisk".into(), location_id: 2 }));
    }
}
