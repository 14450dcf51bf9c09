use crate::model::menu_item::{MenuItemDto, SaveMenuItemDto};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl MenuItem {
    pub fn from_entity(entity: entity::menu_item::Model) -> Self {
        Self {
            id: entity.id,
            category: entity.category,
            name: entity.name,
            description: entity.description,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> MenuItemDto {
        MenuItemDto {
            id: self.id,
            category: self.category,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Full set of editable menu item fields, used for both create and update.
#[derive(Debug, Clone)]
pub struct SaveMenuItemParams {
    pub category: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl From<SaveMenuItemDto> for SaveMenuItemParams {
    fn from(dto: SaveMenuItemDto) -> Self {
        Self {
            category: dto.category.trim().to_string(),
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            price: dto.price.trim().to_string(),
        }
    }
}
