use cli_table::{format::Justify, Table};
use commitstrip_core::api::search;

#[derive(Debug, Clone, Table)]
pub struct Comic {
    #[table(title = "ID", justify = "Justify::Right")]
    id: u64,
    #[table(title = "Title")]
    title: String,
    #[table(title = "Publish date")]
    date: String,
}

impl From<search::Post> for Comic {
    fn from(search::Post { id, title, date }: search::Post) -> Self {
        Comic { id, title, date }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_keeps_all_columns() {
        let comic = Comic::from(search::Post {
            id: 4242,
            title: "The new feature".into(),
            date: "2021-03-04".into(),
        });
        assert_eq!(comic.id, 4242);
        assert_eq!(comic.title, "The new feature");
        assert_eq!(comic.date, "2021-03-04");
    }
}
