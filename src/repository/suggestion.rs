use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::suggestion::{Suggestion, SuggestionInsert};
use crate::domain::types::SuggestionContent;
use crate::models::suggestion::{NewSuggestion as DbNewSuggestion, Suggestion as DbSuggestion};
use crate::repository::{DieselRepository, SuggestionReader, SuggestionWriter};

impl SuggestionReader for DieselRepository {
    fn list_top_suggestions(&self, limit: usize) -> RepositoryResult<Vec<Suggestion>> {
        use crate::schema::suggestions;

        let mut conn = self.conn()?;

        let items = suggestions::table
            .order((suggestions::usage_count.desc(), suggestions::id.asc()))
            .limit(limit as i64)
            .load::<DbSuggestion>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Suggestion>, _>>()?;

        Ok(items)
    }
}

impl SuggestionWriter for DieselRepository {
    fn create_suggestion(&self, content: &SuggestionContent) -> RepositoryResult<SuggestionInsert> {
        use crate::schema::suggestions;

        let mut conn = self.conn()?;

        // `content` is UNIQUE, so an existing row turns the insert into a no-op.
        let affected = diesel::insert_or_ignore_into(suggestions::table)
            .values(DbNewSuggestion {
                content: content.as_str(),
            })
            .execute(&mut conn)?;

        Ok(if affected > 0 {
            SuggestionInsert::Created
        } else {
            SuggestionInsert::Exists
        })
    }

    fn seed_suggestions(&self, contents: &[SuggestionContent]) -> RepositoryResult<usize> {
        use crate::schema::suggestions;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut inserted = 0;
            for content in contents {
                inserted += diesel::insert_or_ignore_into(suggestions::table)
                    .values(DbNewSuggestion {
                        content: content.as_str(),
                    })
                    .execute(conn)?;
            }
            Ok(inserted)
        })
    }
}
