/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountRole::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AccountRole::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AccountRole::Account).uuid().not_null())
                    .col(ColumnDef::new(AccountRole::Role).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-account_role-account")
                            .from(AccountRole::Table, AccountRole::Account)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-account_role-role")
                            .from(AccountRole::Table, AccountRole::Role)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-account_role-account-role")
                    .table(AccountRole::Table)
                    .col(AccountRole::Account)
                    .col(AccountRole::Role)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AccountRole {
    Table,
    Id,
    Account,
    Role,
}

#[derive(DeriveIden)]
enum Account {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
}
