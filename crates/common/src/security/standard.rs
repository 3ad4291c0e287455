//! 标准权限目录
//!
//! 各个服务注册的全部 action，按服务和 API 分组，保持注册顺序。

use super::action::ActionScope::{Global, Group, Realm};
use super::action::{Action, ActionScope, Api, Service};

const fn action(service: Service, api: Api, name: &'static str, scope: ActionScope) -> Action {
    Action {
        service,
        api,
        name,
        scope,
    }
}

pub(super) const STANDARD_ACTIONS: &[Action] = &[
    action(Service::Bridge, Api::Communication, "COM_SendEmail", Realm),
    action(Service::Bridge, Api::Communication, "COM_SendSMS", Realm),

    action(Service::Bridge, Api::Events, "EV_GetActions", Global),
    action(Service::Bridge, Api::Events, "EV_GetEvents", Realm),
    action(Service::Bridge, Api::Events, "EV_GetEventsSummary", Realm),
    action(Service::Bridge, Api::Events, "EV_GetUserEvents", Group),

    action(Service::Bridge, Api::Kyc, "KYC_GetActions", Global),
    action(Service::Bridge, Api::Kyc, "KYC_GetUserInSocialRealm", Realm),
    action(Service::Bridge, Api::Kyc, "KYC_GetUser", Group),
    action(Service::Bridge, Api::Kyc, "KYC_GetUserByUsernameInSocialRealm", Realm),
    action(Service::Bridge, Api::Kyc, "KYC_GetUserByUsername", Group),
    action(Service::Bridge, Api::Kyc, "KYC_ValidateUserInSocialRealm", Realm),
    action(Service::Bridge, Api::Kyc, "KYC_ValidateUser", Group),
    action(Service::Bridge, Api::Kyc, "KYC_SendSmsConsentCodeInSocialRealm", Realm),
    action(Service::Bridge, Api::Kyc, "KYC_SendSmsConsentCode", Group),
    action(Service::Bridge, Api::Kyc, "KYC_SendSmsCodeInSocialRealm", Realm),
    action(Service::Bridge, Api::Kyc, "KYC_SendSmsCode", Group),
    action(Service::Bridge, Api::Kyc, "KYC_ValidateUserBasicID", Realm),

    action(Service::Bridge, Api::Management, "MGMT_GetActions", Global),
    action(Service::Bridge, Api::Management, "MGMT_GetRealms", Global),
    action(Service::Bridge, Api::Management, "MGMT_GetRealm", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetClient", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetClients", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetRequiredActions", Realm),
    action(Service::Bridge, Api::Management, "MGMT_DeleteUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_UpdateUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_LockUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_UnlockUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetUsers", Group),
    action(Service::Bridge, Api::Management, "MGMT_CreateUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_CreateUserInSocialRealm", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetUserChecks", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetUserAccountStatus", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetUserAccountStatusByEmail", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetRolesOfUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_AddRoleToUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_DeleteRoleForUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetGroupsOfUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_SetGroupsToUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_AssignableGroupsToUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetAvailableTrustIDGroups", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetTrustIDGroups", Group),
    action(Service::Bridge, Api::Management, "MGMT_SetTrustIDGroups", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetClientRolesForUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_AddClientRolesToUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_DeleteClientRolesFromUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_ResetPassword", Group),
    action(Service::Bridge, Api::Management, "MGMT_ExecuteActionsEmail", Group),
    action(Service::Bridge, Api::Management, "ACCR_RevokeAccreditations", Group),
    action(Service::Bridge, Api::Management, "MGMT_SendSmsCode", Group),
    action(Service::Bridge, Api::Management, "MGMT_SendOnboardingEmail", Group),
    action(Service::Bridge, Api::Management, "MGMT_SendOnboardingEmailInSocialRealm", Realm),
    action(Service::Bridge, Api::Management, "MGMT_SendReminderEmail", Group),
    action(Service::Bridge, Api::Management, "MGMT_ResetSmsCounter", Group),
    action(Service::Bridge, Api::Management, "MGMT_CreateRecoveryCode", Group),
    action(Service::Bridge, Api::Management, "MGMT_CreateActivationCode", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetCredentialsForUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_DeleteCredentialsForUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_ResetCredentialFailuresForUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_ClearUserLoginFailures", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetAttackDetectionStatus", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetRoles", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetRole", Realm),
    action(Service::Bridge, Api::Management, "MGMT_CreateRole", Realm),
    action(Service::Bridge, Api::Management, "MGMT_UpdateRole", Realm),
    action(Service::Bridge, Api::Management, "MGMT_DeleteRole", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetGroups", Realm),
    action(Service::Bridge, Api::Management, "MGMT_IncludedInGetGroups", Group),
    action(Service::Bridge, Api::Management, "MGMT_CreateGroup", Realm),
    action(Service::Bridge, Api::Management, "MGMT_DeleteGroup", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetAuthorizations", Group),
    action(Service::Bridge, Api::Management, "MGMT_UpdateAuthorizations", Group),
    action(Service::Bridge, Api::Management, "MGMT_AddAuthorization", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetAuthorization", Group),
    action(Service::Bridge, Api::Management, "MGMT_DeleteAuthorization", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetClientRoles", Realm),
    action(Service::Bridge, Api::Management, "MGMT_CreateClientRole", Realm),
    action(Service::Bridge, Api::Management, "MGMT_DeleteClientRole", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetRealmCustomConfiguration", Realm),
    action(Service::Bridge, Api::Management, "MGMT_UpdateRealmCustomConfiguration", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetRealmAdminConfiguration", Realm),
    action(Service::Bridge, Api::Management, "MGMT_UpdateRealmAdminConfiguration", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetRealmBackOfficeConfiguration", Group),
    action(Service::Bridge, Api::Management, "MGMT_UpdateRealmBackOfficeConfiguration", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetUserRealmBackOfficeConfiguration", Realm),
    action(Service::Bridge, Api::Management, "MGMT_GetFederatedIdentities", Group),
    action(Service::Bridge, Api::Management, "MGMT_LinkShadowUser", Group),
    action(Service::Bridge, Api::Management, "MGMT_GetIdentityProviders", Realm),

    action(Service::Bridge, Api::Statistic, "ST_GetActions", Global),
    action(Service::Bridge, Api::Statistic, "ST_GetStatistics", Realm),
    action(Service::Bridge, Api::Statistic, "ST_GetStatisticsIdentifications", Realm),
    action(Service::Bridge, Api::Statistic, "ST_GetStatisticsUsers", Realm),
    action(Service::Bridge, Api::Statistic, "ST_GetStatisticsAuthenticators", Realm),
    action(Service::Bridge, Api::Statistic, "ST_GetStatisticsAuthentications", Realm),
    action(Service::Bridge, Api::Statistic, "ST_GetStatisticsAuthenticationsLog", Realm),
    action(Service::Bridge, Api::Statistic, "ST_GetMigrationReport", Realm),

    action(Service::Bridge, Api::Task, "TSK_DeleteDeniedToUUsers", Global),

    action(Service::IdNow, Api::IdNow, "IDN_GetActions", Global),
    action(Service::IdNow, Api::IdNow, "IDN_Init", Group),
    action(Service::IdNow, Api::IdNow, "IDN_AutoIdentInit", Group),

    action(Service::PaperCard, Api::Cards, "PC_GetActions", Global),
    action(Service::PaperCard, Api::Cards, "PC_GetConfigurationRealm", Realm),
    action(Service::PaperCard, Api::Cards, "PC_SetConfigurationRealm", Realm),
    action(Service::PaperCard, Api::Cards, "PC_GetConfigurationSelf", Realm),
    action(Service::PaperCard, Api::Cards, "PC_SetConfigurationSelf", Realm),
    action(Service::PaperCard, Api::Cards, "PC_GetConfigurationBatch", Realm),
    action(Service::PaperCard, Api::Cards, "PC_SetConfigurationBatch", Realm),
    action(Service::PaperCard, Api::Cards, "PC_Preview", Realm),
    action(Service::PaperCard, Api::Cards, "PC_CreateBatch", Realm),
    action(Service::PaperCard, Api::Cards, "PC_GetBatches", Realm),
    action(Service::PaperCard, Api::Cards, "PC_GetBatch", Realm),
    action(Service::PaperCard, Api::Cards, "PC_DeleteBatch", Realm),
    action(Service::PaperCard, Api::Cards, "PC_ActivateBatch", Realm),
    action(Service::PaperCard, Api::Cards, "PC_BlockBatch", Realm),
    action(Service::PaperCard, Api::Cards, "PC_DownloadBatch", Realm),

    action(Service::Scheduler, Api::Scheduler, "SDLR_GetActions", Global),
    action(Service::Scheduler, Api::Scheduler, "SDLR_GetTasks", Global),
    action(Service::Scheduler, Api::Scheduler, "SDLR_AddTasks", Global),
    action(Service::Scheduler, Api::Scheduler, "SDLR_DeleteTask", Global),

    action(Service::Signature, Api::Signature, "SIG_GetActions", Global),
    // CH/AES 沿用默认名称
    action(Service::Signature, Api::Signature, "SIG_SignDocuments", Realm),
    action(Service::Signature, Api::Signature, "SIG_SignDocuments_CH_QES", Realm),
    action(Service::Signature, Api::Signature, "SIG_SignDocuments_EU_AES", Realm),
    action(Service::Signature, Api::Signature, "SIG_SignDocuments_EU_QES", Realm),

    action(Service::Voucher, Api::Management, "VOU_GetActions", Global),
    action(Service::Voucher, Api::Management, "VOU_GetBatches", Realm),
    action(Service::Voucher, Api::Management, "VOU_CreateBatch", Realm),
    action(Service::Voucher, Api::Management, "VOU_GetBatch", Realm),
    action(Service::Voucher, Api::Management, "VOU_RevokeBatch", Realm),
    action(Service::Voucher, Api::Management, "VOU_DownloadBatch", Realm),
    action(Service::Voucher, Api::Management, "VOU_GetVoucher", Realm),
    action(Service::Voucher, Api::Management, "VOU_GetConfiguration", Realm),
    action(Service::Voucher, Api::Management, "VOU_UpdateConfiguration", Realm),
    action(Service::Voucher, Api::Management, "VOU_GetAbuseCounter", Group),
    action(Service::Voucher, Api::Management, "VOU_ResetAbuseCounter", Group),

    action(Service::Accreditation, Api::Management, "ACCR_GetActions", Global),
    action(Service::Accreditation, Api::Management, "ACCR_GetAllAccreditations", Global),
    action(Service::Accreditation, Api::Management, "ACCR_GetEnabledAccreditations", Realm),
    action(Service::Accreditation, Api::Management, "ACCR_GetAccreditation", Realm),
    action(Service::Accreditation, Api::Management, "ACCR_EnableAccreditation", Realm),
    action(Service::Accreditation, Api::Management, "ACCR_DisableAccreditation", Realm),
    action(Service::Accreditation, Api::Management, "ACCR_ConfigureAccreditation", Realm),
    action(Service::Accreditation, Api::Management, "ACCR_GetAccreditationGroups", Group),
    action(Service::Accreditation, Api::Management, "ACCR_EnableAccreditationForGroup", Group),
    action(Service::Accreditation, Api::Management, "ACCR_DisableAccreditationForGroup", Group),
];
