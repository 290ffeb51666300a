use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Latest known state of every validator, keyed by vote account
        manager
            .create_table(
                Table::create()
                    .table(Validators::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Validators::VotePubkey).string().not_null().primary_key())
                    .col(ColumnDef::new(Validators::IdentityPubkey).string().not_null())
                    .col(ColumnDef::new(Validators::Commission).integer().not_null().default(0))
                    .col(ColumnDef::new(Validators::ActivatedStake).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Validators::LastVote).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Validators::RootSlot).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Validators::Name).string().null())
                    .col(ColumnDef::new(Validators::Website).string().null())
                    .col(ColumnDef::new(Validators::SkipRate).double().null())
                    .col(ColumnDef::new(Validators::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Profile and skip-rate updates are matched on the identity key
        manager
            .create_index(
                Index::create()
                    .name("idx_validators_identity_pubkey")
                    .table(Validators::Table)
                    .col(Validators::IdentityPubkey)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ValidatorPerformance::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ValidatorPerformance::VotePubkey).string().not_null())
                    .col(ColumnDef::new(ValidatorPerformance::Epoch).big_integer().not_null())
                    .col(ColumnDef::new(ValidatorPerformance::Credits).big_integer().not_null().default(0))
                    .col(ColumnDef::new(ValidatorPerformance::CreditsStart).big_integer().not_null().default(0))
                    .col(ColumnDef::new(ValidatorPerformance::CreditsEnd).big_integer().not_null().default(0))
                    .col(ColumnDef::new(ValidatorPerformance::SkipRate).double().not_null().default(0.0))
                    .col(ColumnDef::new(ValidatorPerformance::UpdatedAt).timestamp_with_time_zone().not_null())
                    .primary_key(
                        Index::create()
                            .col(ValidatorPerformance::VotePubkey)
                            .col(ValidatorPerformance::Epoch),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EpochInfo::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EpochInfo::Epoch).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(EpochInfo::SlotIndex).big_integer().not_null().default(0))
                    .col(ColumnDef::new(EpochInfo::SlotsInEpoch).big_integer().not_null().default(0))
                    .col(ColumnDef::new(EpochInfo::AbsoluteSlot).big_integer().not_null().default(0))
                    .col(ColumnDef::new(EpochInfo::BlockHeight).big_integer().not_null().default(0))
                    .col(ColumnDef::new(EpochInfo::TransactionCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(EpochInfo::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EpochInfo::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ValidatorPerformance::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Validators::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Validators {
    Table,
    VotePubkey,
    IdentityPubkey,
    Commission,
    ActivatedStake,
    LastVote,
    RootSlot,
    Name,
    Website,
    SkipRate,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ValidatorPerformance {
    Table,
    VotePubkey,
    Epoch,
    Credits,
    CreditsStart,
    CreditsEnd,
    SkipRate,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EpochInfo {
    Table,
    Epoch,
    SlotIndex,
    SlotsInEpoch,
    AbsoluteSlot,
    BlockHeight,
    TransactionCount,
    UpdatedAt,
}
