use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per validator per ingestion run, reloaded wholesale
        manager
            .create_table(
                Table::create()
                    .table(Stats::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stats::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Stats::Slot).big_integer().not_null())
                    .col(ColumnDef::new(Stats::LastVote).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Stats::RootSlot).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Stats::IdentityPubkey).string().not_null())
                    .col(ColumnDef::new(Stats::VoteAccountPubkey).string().not_null())
                    .col(ColumnDef::new(Stats::Commission).integer().not_null().default(0))
                    .col(ColumnDef::new(Stats::SkipRate).double().not_null().default(0.0))
                    .col(ColumnDef::new(Stats::Stakers).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Stats::Stake).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Stats::LeaderSlots).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Stats::BlocksProduced).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Stats::SkippedSlots).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Stats::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Retention cleanup filters on created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_stats_created_at")
                    .table(Stats::Table)
                    .col(Stats::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Stakers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stakers::StakePubkey).string().not_null().primary_key())
                    .col(ColumnDef::new(Stakers::StakeType).string().not_null())
                    .col(ColumnDef::new(Stakers::AccountBalance).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Stakers::CreditsObserved).big_integer().null())
                    .col(ColumnDef::new(Stakers::DelegatedStake).big_integer().null())
                    .col(ColumnDef::new(Stakers::DelegatedVoteAccountAddress).string().null())
                    .col(ColumnDef::new(Stakers::ActivationEpoch).big_integer().null())
                    .col(ColumnDef::new(Stakers::DeactivationEpoch).big_integer().null())
                    .col(ColumnDef::new(Stakers::Staker).string().null())
                    .col(ColumnDef::new(Stakers::Withdrawer).string().null())
                    .col(ColumnDef::new(Stakers::RentExemptReserve).big_integer().null())
                    .col(ColumnDef::new(Stakers::ActiveStake).big_integer().not_null())
                    .col(ColumnDef::new(Stakers::ActivatingStake).big_integer().null())
                    .col(ColumnDef::new(Stakers::DeactivatingStake).big_integer().null())
                    .col(ColumnDef::new(Stakers::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stakers_vote_account")
                    .table(Stakers::Table)
                    .col(Stakers::DelegatedVoteAccountAddress)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stakers::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stats::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Stats {
    Table,
    Id,
    Slot,
    LastVote,
    RootSlot,
    IdentityPubkey,
    VoteAccountPubkey,
    Commission,
    SkipRate,
    Stakers,
    Stake,
    LeaderSlots,
    BlocksProduced,
    SkippedSlots,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Stakers {
    Table,
    StakePubkey,
    StakeType,
    AccountBalance,
    CreditsObserved,
    DelegatedStake,
    DelegatedVoteAccountAddress,
    ActivationEpoch,
    DeactivationEpoch,
    Staker,
    Withdrawer,
    RentExemptReserve,
    ActiveStake,
    ActivatingStake,
    DeactivatingStake,
    CreatedAt,
}
