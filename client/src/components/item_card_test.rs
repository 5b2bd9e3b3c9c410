use super::*;

fn untitled(category: &str) -> Item {
    Item {
        id: "i1".to_owned(),
        title: "  ".to_owned(),
        description: String::new(),
        category: category.to_owned(),
        location: "Library".to_owned(),
        date: None,
        image_url: None,
    }
}

#[test]
fn display_date_strips_time_component() {
    assert_eq!(display_date("2024-03-01T10:00:00.000Z"), "2024-03-01");
}

#[test]
fn display_date_passes_plain_dates_through() {
    assert_eq!(display_date("2024-03-01"), "2024-03-01");
}

#[test]
fn display_title_falls_back_to_category() {
    assert_eq!(display_title(&untitled("Electronics")), "Lost electronics");
}

#[test]
fn display_title_uses_title_when_present() {
    let item = Item { title: "Blue backpack".to_owned(), ..untitled("Bags") };
    assert_eq!(display_title(&item), "Blue backpack");
}
