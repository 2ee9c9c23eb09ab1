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
                    .table(ProjectUser::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectUser::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ProjectUser::Project).uuid().not_null())
                    .col(ColumnDef::new(ProjectUser::Account).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_user-project")
                            .from(ProjectUser::Table, ProjectUser::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_user-account")
                            .from(ProjectUser::Table, ProjectUser::Account)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-project_user-project-account")
                    .table(ProjectUser::Table)
                    .col(ProjectUser::Project)
                    .col(ProjectUser::Account)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectUser {
    Table,
    Id,
    Project,
    Account,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Account {
    Table,
    Id,
}
