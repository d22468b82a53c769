use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::message::{Message, NewMessage, Turn};
use crate::models::message::{Message as DbMessage, NewMessage as DbNewMessage};
use crate::repository::{ConversationWriter, DieselRepository, MessageReader};

impl MessageReader for DieselRepository {
    fn list_recent_messages(&self, limit: usize) -> RepositoryResult<Vec<Message>> {
        use crate::schema::messages;

        let mut conn = self.conn()?;

        let items = messages::table
            .order((messages::timestamp.desc(), messages::id.desc()))
            .limit(limit as i64)
            .load::<DbMessage>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Message>, _>>()?;

        Ok(items)
    }
}

impl ConversationWriter for DieselRepository {
    fn record_turn(&self, user: &NewMessage, bot: &NewMessage) -> RepositoryResult<Turn> {
        use crate::schema::{messages, suggestions};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let user_row = diesel::insert_into(messages::table)
                .values(DbNewMessage::from(user))
                .get_result::<DbMessage>(conn)?;

            let bot_row = diesel::insert_into(messages::table)
                .values(DbNewMessage::from(bot))
                .get_result::<DbMessage>(conn)?;

            // Increment in SQL so concurrent turns do not overwrite each other.
            let bumped = diesel::update(
                suggestions::table.filter(suggestions::content.eq(user.content.as_str())),
            )
            .set(suggestions::usage_count.eq(suggestions::usage_count + 1))
            .execute(conn)?;

            Ok(Turn {
                user_message: user_row.try_into()?,
                bot_message: bot_row.try_into()?,
                suggestion_used: bumped > 0,
            })
        })
    }
}
