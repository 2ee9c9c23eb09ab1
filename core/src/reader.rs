/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Lazy projection of forward-only row sources.
//!
//! A row is read from the source only when the consumer asks for the next
//! projected item, so stopping early leaves the remaining rows unread. Both
//! adapters are single pass and stop for good after the source is exhausted
//! or reports an error.

use async_stream::try_stream;
use futures::{Stream, TryStreamExt};

/// A forward-only, single-pass source of rows.
pub trait RowCursor {
    type Row;
    type Error;

    fn read(&mut self) -> Result<Option<Self::Row>, Self::Error>;
}

#[derive(Debug)]
pub struct Projection<C, F> {
    cursor: C,
    projection: F,
    finished: bool,
}

impl<C, F, T> Iterator for Projection<C, F>
where
    C: RowCursor,
    F: FnMut(C::Row) -> T,
{
    type Item = Result<T, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.cursor.read() {
            Ok(Some(row)) => Some(Ok((self.projection)(row))),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<C, F, T> std::iter::FusedIterator for Projection<C, F>
where
    C: RowCursor,
    F: FnMut(C::Row) -> T,
{
}

pub fn project<C, F, T>(cursor: C, projection: F) -> Projection<C, F>
where
    C: RowCursor,
    F: FnMut(C::Row) -> T,
{
    Projection {
        cursor,
        projection,
        finished: false,
    }
}

/// Async counterpart of [`project`] for row streams such as the ones
/// returned by sea-orm's `stream`. The projection itself may fail.
pub fn project_stream<S, R, T, E, F>(
    rows: S,
    mut projection: F,
) -> impl Stream<Item = Result<T, E>>
where
    S: Stream<Item = Result<R, E>>,
    F: FnMut(R) -> Result<T, E>,
{
    try_stream! {
        futures::pin_mut!(rows);
        while let Some(row) = rows.try_next().await? {
            yield projection(row)?;
        }
    }
}
