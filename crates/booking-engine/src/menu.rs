//! Restaurant menu catalog.
//!
//! The store holds the menu as flat items tagged with a section (cuisine) and a
//! category (course). When the store is empty the house menu from
//! [`default_menu`] is served and seeded. Admin edits go through
//! [`MenuDraft::validate`] so a half-filled form never reaches the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// Menu section, one tab on the restaurant page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuSection {
    North,
    South,
    Desserts,
    Beverages,
}

impl MenuSection {
    pub const ALL: [MenuSection; 4] = [
        MenuSection::North,
        MenuSection::South,
        MenuSection::Desserts,
        MenuSection::Beverages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuSection::North => "North Indian",
            MenuSection::South => "South Indian",
            MenuSection::Desserts => "Desserts",
            MenuSection::Beverages => "Beverages",
        }
    }

    /// Categories an item in this section may be filed under.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            MenuSection::North => &["Starters", "Main Course", "Breads"],
            MenuSection::South => &["Starters", "Dosa & Tiffin", "Main Course", "Breads & Rice"],
            MenuSection::Desserts => &["Desserts"],
            MenuSection::Beverages => &["Beverages"],
        }
    }

    fn key(self) -> &'static str {
        match self {
            MenuSection::North => "north",
            MenuSection::South => "south",
            MenuSection::Desserts => "desserts",
            MenuSection::Beverages => "beverages",
        }
    }
}

impl FromStr for MenuSection {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        MenuSection::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BookingError::InvalidMenuItem(format!("unknown section '{}'", s)))
    }
}

impl fmt::Display for MenuSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub is_veg: bool,
    pub category: String,
    pub section: MenuSection,
}

/// The house menu.
pub fn default_menu() -> Vec<MenuItem> {
    use MenuSection::{Beverages, Desserts, North, South};

    let rows: &[(MenuSection, &str, &str, f64, bool, &str)] = &[
        (North, "Starters", "Paneer Tikka", 280.0, true, "Marinated cottage cheese grilled in tandoor with spices"),
        (North, "Starters", "Hara Bhara Kebab", 220.0, true, "Spinach and green pea patties, lightly spiced and pan-fried"),
        (North, "Starters", "Chicken Malai Tikka", 340.0, false, "Creamy marinated chicken pieces grilled to perfection"),
        (North, "Starters", "Mutton Seekh Kebab", 380.0, false, "Minced mutton skewers with aromatic spices"),
        (North, "Starters", "Amritsari Fish Fry", 360.0, false, "Crispy batter-fried fish fillets with ajwain and spices"),
        (North, "Starters", "Dahi Ke Kebab", 240.0, true, "Soft hung curd kebabs with mild spices"),
        (North, "Main Course", "Dal Makhani", 260.0, true, "Slow-cooked black lentils in rich buttery tomato gravy"),
        (North, "Main Course", "Shahi Paneer", 300.0, true, "Cottage cheese in creamy cashew and tomato gravy"),
        (North, "Main Course", "Butter Chicken", 360.0, false, "Tandoori chicken in velvety tomato-butter sauce"),
        (North, "Main Course", "Mutton Rogan Josh", 420.0, false, "Kashmiri-style mutton curry with aromatic spices"),
        (North, "Main Course", "Palak Paneer", 280.0, true, "Cottage cheese cubes in creamy spinach gravy"),
        (North, "Main Course", "Chicken Biryani", 340.0, false, "Fragrant basmati rice layered with spiced chicken"),
        (North, "Main Course", "Veg Biryani", 260.0, true, "Aromatic basmati rice with seasonal vegetables and saffron"),
        (North, "Main Course", "Rajma Masala", 220.0, true, "Kidney beans in thick onion-tomato gravy, Punjabi style"),
        (North, "Main Course", "Kadai Chicken", 340.0, false, "Chicken cooked with bell peppers in kadai masala"),
        (North, "Breads", "Butter Naan", 60.0, true, "Soft leavened bread brushed with butter"),
        (North, "Breads", "Garlic Naan", 70.0, true, "Naan topped with garlic and fresh coriander"),
        (North, "Breads", "Laccha Paratha", 60.0, true, "Flaky layered whole wheat bread"),
        (North, "Breads", "Stuffed Kulcha", 80.0, true, "Naan stuffed with spiced potato or paneer filling"),
        (North, "Breads", "Tandoori Roti", 40.0, true, "Whole wheat bread baked in clay oven"),
        (South, "Starters", "Medu Vada", 160.0, true, "Crispy urad dal doughnuts served with sambar and chutney"),
        (South, "Starters", "Chicken 65", 320.0, false, "Spicy deep-fried chicken with curry leaves and chilies"),
        (South, "Starters", "Gobi 65", 220.0, true, "Crispy fried cauliflower tossed in spicy masala"),
        (South, "Starters", "Prawns Fry", 380.0, false, "Kerala-style spiced prawns, shallow fried"),
        (South, "Dosa & Tiffin", "Masala Dosa", 180.0, true, "Crispy rice crepe with spiced potato filling"),
        (South, "Dosa & Tiffin", "Mysore Masala Dosa", 200.0, true, "Dosa with red chutney spread and potato filling"),
        (South, "Dosa & Tiffin", "Rava Dosa", 190.0, true, "Crispy semolina crepe with onions and cashews"),
        (South, "Dosa & Tiffin", "Set Dosa", 160.0, true, "Soft spongy dosa served in a set of three"),
        (South, "Dosa & Tiffin", "Idli Sambar", 140.0, true, "Steamed rice cakes with lentil soup and chutneys"),
        (South, "Dosa & Tiffin", "Uttapam", 170.0, true, "Thick rice pancake topped with onion, tomato and chilies"),
        (South, "Main Course", "Chettinad Chicken Curry", 380.0, false, "Fiery chicken curry with freshly ground spices"),
        (South, "Main Course", "Kerala Fish Curry", 360.0, false, "Tangy coconut-based fish curry with kokum"),
        (South, "Main Course", "Sambar Rice", 200.0, true, "Steamed rice with aromatic lentil and vegetable stew"),
        (South, "Main Course", "Hyderabadi Mutton Biryani", 420.0, false, "Dum-cooked biryani with tender mutton and saffron rice"),
        (South, "Main Course", "Avial", 240.0, true, "Mixed vegetables in coconut and yogurt gravy"),
        (South, "Main Course", "Egg Roast", 220.0, false, "Kerala-style boiled eggs in spicy onion-tomato masala"),
        (South, "Main Course", "Rasam Rice", 180.0, true, "Steamed rice with tangy pepper-tomato rasam"),
        (South, "Breads & Rice", "Appam", 120.0, true, "Lacy rice pancake with soft center, served with stew"),
        (South, "Breads & Rice", "Parotta", 60.0, true, "Flaky layered Kerala-style flatbread"),
        (South, "Breads & Rice", "Lemon Rice", 160.0, true, "Tangy rice with peanuts, curry leaves and mustard"),
        (South, "Breads & Rice", "Coconut Rice", 170.0, true, "Rice tempered with coconut, cashews and spices"),
        (Desserts, "Desserts", "Gulab Jamun", 120.0, true, "Soft milk dumplings soaked in rose-flavored sugar syrup"),
        (Desserts, "Desserts", "Rasmalai", 150.0, true, "Soft cottage cheese patties in saffron-cardamom milk"),
        (Desserts, "Desserts", "Payasam", 130.0, true, "Traditional South Indian vermicelli kheer with cardamom"),
        (Desserts, "Desserts", "Gajar Ka Halwa", 160.0, true, "Warm carrot pudding with khoya, nuts and saffron"),
        (Desserts, "Desserts", "Double Ka Meetha", 140.0, true, "Hyderabadi bread pudding with condensed milk and nuts"),
        (Desserts, "Desserts", "Kulfi", 120.0, true, "Traditional Indian frozen dessert with pistachios"),
        (Beverages, "Beverages", "Masala Chai", 60.0, true, "Spiced Indian tea with ginger and cardamom"),
        (Beverages, "Beverages", "Filter Coffee", 80.0, true, "Strong South Indian filter coffee with frothy milk"),
        (Beverages, "Beverages", "Mango Lassi", 120.0, true, "Chilled yogurt smoothie with Alphonso mango"),
        (Beverages, "Beverages", "Sweet Lassi", 90.0, true, "Traditional chilled sweetened yogurt drink"),
        (Beverages, "Beverages", "Buttermilk", 70.0, true, "Spiced churned yogurt with curry leaves and cumin"),
        (Beverages, "Beverages", "Fresh Lime Soda", 80.0, true, "Refreshing lime juice with soda, sweet or salted"),
        (Beverages, "Beverages", "Jaljeera", 80.0, true, "Tangy cumin-mint cooler, a classic Indian refresher"),
    ];

    rows.iter()
        .map(|&(section, category, name, price, is_veg, description)| MenuItem {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            price,
            is_veg,
            category: category.to_string(),
            section,
        })
        .collect()
}

/// Items in `section` (all sections when `None`) whose name or category
/// contains `search`, case-insensitively. An empty search matches everything.
pub fn filter_menu<'a>(
    items: &'a [MenuItem],
    section: Option<MenuSection>,
    search: &str,
) -> Vec<&'a MenuItem> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| section.is_none_or(|s| item.section == s))
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Group one section's items by category, keeping categories in first-seen order.
pub fn group_by_category(items: &[MenuItem], section: MenuSection) -> Vec<(&str, Vec<&MenuItem>)> {
    let mut groups: Vec<(&str, Vec<&MenuItem>)> = Vec::new();
    for item in items.iter().filter(|i| i.section == section) {
        match groups.iter_mut().find(|(c, _)| *c == item.category) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.category.as_str(), vec![item])),
        }
    }
    groups
}

/// The admin add/edit form, as raw field values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub is_veg: bool,
    pub category: String,
    pub section: Option<MenuSection>,
}

impl MenuDraft {
    /// Prefill the form from an existing item.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            is_veg: item.is_veg,
            category: item.category.clone(),
            section: Some(item.section),
        }
    }

    /// Validate the form into a menu item without an id.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidMenuItem` when a field is blank, the price
    /// is not a positive number, or the category does not belong to the section.
    pub fn validate(&self) -> Result<MenuItem> {
        let name = self.name.trim();
        let description = self.description.trim();
        let category = self.category.trim();
        let price = self.price.trim();

        if name.is_empty() || description.is_empty() || price.is_empty() || category.is_empty() {
            return Err(BookingError::InvalidMenuItem(
                "Please fill in all fields".to_string(),
            ));
        }
        let section = self
            .section
            .ok_or_else(|| BookingError::InvalidMenuItem("Please fill in all fields".to_string()))?;

        let invalid_price =
            || BookingError::InvalidMenuItem("Please enter a valid price".to_string());
        let price: f64 = price.parse().map_err(|_| invalid_price())?;
        if !price.is_finite() || price <= 0.0 {
            return Err(invalid_price());
        }

        if !section.categories().contains(&category) {
            return Err(BookingError::InvalidMenuItem(format!(
                "'{}' is not a {} category",
                category,
                section.label()
            )));
        }

        Ok(MenuItem {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            price,
            is_veg: self.is_veg,
            category: category.to_string(),
            section,
        })
    }
}

/// In-memory menu collection with the admin manager's edits.
#[derive(Debug, Clone, Default)]
pub struct MenuBook {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl MenuBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap items already loaded from the store.
    ///
    /// Items keep their ids, except that an item without an id or with an id
    /// already taken by an earlier item gets a fresh one, so every id in the
    /// book is unique.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        let mut book = Self::new();
        for item in items {
            let taken = item.id.as_deref().map(|id| book.get(id).is_some());
            match taken {
                Some(false) => book.items.push(item),
                Some(true) => {
                    log::warn!("duplicate menu item id {:?}, assigning a new one", item.id);
                    book.add(item);
                }
                None => {
                    book.add(item);
                }
            }
        }
        book
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id.as_deref() == Some(id))
    }

    /// Seed the house menu when the collection is empty. Returns whether it seeded.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.items.is_empty() {
            return false;
        }
        for item in default_menu() {
            self.add(item);
        }
        true
    }

    /// Add an item and return its newly assigned id.
    pub fn add(&mut self, mut item: MenuItem) -> String {
        let id = loop {
            self.next_id += 1;
            let candidate = format!("item-{}", self.next_id);
            if self.get(&candidate).is_none() {
                break candidate;
            }
        };
        item.id = Some(id.clone());
        self.items.push(item);
        id
    }

    /// Replace the fields of an existing item, keeping its id.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidMenuItem` if no item has this id.
    pub fn update(&mut self, id: &str, mut item: MenuItem) -> Result<()> {
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id.as_deref() == Some(id))
            .ok_or_else(|| BookingError::InvalidMenuItem(format!("no menu item with id '{}'", id)))?;
        item.id = Some(id.to_string());
        *slot = item;
        Ok(())
    }

    /// Remove an item and return it.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidMenuItem` if no item has this id.
    pub fn remove(&mut self, id: &str) -> Result<MenuItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id.as_deref() == Some(id))
            .ok_or_else(|| BookingError::InvalidMenuItem(format!("no menu item with id '{}'", id)))?;
        Ok(self.items.remove(index))
    }
}
