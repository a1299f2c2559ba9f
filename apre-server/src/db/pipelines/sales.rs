//! Sales report pipelines (`sales` collection)

use mongodb::bson::doc;
use shared::MonthRange;

use super::{Pipeline, bson_date};

/// Total sales per salesperson in one region, by salesperson ascending
pub fn by_region(region: &str) -> Pipeline {
    vec![
        doc! { "$match": { "region": region } },
        doc! {
            "$group": {
                "_id": "$salesperson",
                "totalSales": { "$sum": "$amount" },
            }
        },
        doc! { "$project": { "_id": 0, "salesperson": "$_id", "totalSales": 1 } },
        doc! { "$sort": { "salesperson": 1 } },
    ]
}

/// Sales count and amount of one salesperson per category, channel and region
pub fn by_salesperson(salesperson: &str) -> Pipeline {
    vec![
        doc! { "$match": { "salesperson": salesperson } },
        doc! {
            "$group": {
                "_id": { "category": "$category", "channel": "$channel", "region": "$region" },
                "salesCount": { "$sum": 1 },
                "totalAmount": { "$sum": "$amount" },
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "category": "$_id.category",
                "channel": "$_id.channel",
                "region": "$_id.region",
                "salesCount": 1,
                "totalAmount": 1,
            }
        },
        doc! { "$sort": { "category": 1, "channel": 1, "region": 1 } },
    ]
}

/// Total sales per salesperson for sales dated in `year` (UTC)
pub fn by_year(year: i32) -> Pipeline {
    vec![
        doc! {
            "$group": {
                "_id": { "salesperson": "$salesperson", "year": { "$year": "$date" } },
                "totalSales": { "$sum": "$amount" },
            }
        },
        doc! { "$match": { "_id.year": year } },
        doc! { "$project": { "_id": 0, "salesperson": "$_id.salesperson", "totalSales": 1 } },
        doc! { "$sort": { "salesperson": 1 } },
    ]
}

/// Raw sales in `[range.start, range.end)`, oldest first
pub fn monthly(range: &MonthRange) -> Pipeline {
    vec![
        doc! {
            "$match": {
                "date": { "$gte": bson_date(range.start), "$lt": bson_date(range.end) }
            }
        },
        doc! { "$sort": { "date": 1 } },
        doc! { "$project": { "_id": 0 } },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pipelines::stage_names;

    #[test]
    fn region_pipeline_groups_by_salesperson() {
        let pipeline = by_region("North");
        assert_eq!(stage_names(&pipeline), ["$match", "$group", "$project", "$sort"]);
        assert_eq!(pipeline[0], doc! { "$match": { "region": "North" } });

        let group = pipeline[1].get_document("$group").unwrap();
        assert_eq!(group.get_str("_id").unwrap(), "$salesperson");
        assert_eq!(pipeline[3], doc! { "$sort": { "salesperson": 1 } });
    }

    #[test]
    fn salesperson_pipeline_counts_sales() {
        let pipeline = by_salesperson("Roger Rabbit");
        let group = pipeline[1].get_document("$group").unwrap();
        assert_eq!(group.get_document("salesCount").unwrap(), &doc! { "$sum": 1 });
        assert_eq!(
            group.get_document("totalAmount").unwrap(),
            &doc! { "$sum": "$amount" }
        );
    }

    #[test]
    fn year_pipeline_filters_after_grouping() {
        let pipeline = by_year(2023);
        assert_eq!(stage_names(&pipeline), ["$group", "$match", "$project", "$sort"]);
        assert_eq!(pipeline[1], doc! { "$match": { "_id.year": 2023 } });
    }

    #[test]
    fn monthly_pipeline_uses_half_open_range() {
        let range = MonthRange::for_month(2024, 12).unwrap();
        let pipeline = monthly(&range);
        let date = pipeline[0]
            .get_document("$match")
            .unwrap()
            .get_document("date")
            .unwrap();

        assert_eq!(date.get_datetime("$gte").unwrap().to_chrono(), range.start);
        assert_eq!(date.get_datetime("$lt").unwrap().to_chrono(), range.end);
        assert!(date.get("$lte").is_none());
        assert_eq!(pipeline[1], doc! { "$sort": { "date": 1 } });
    }
}
