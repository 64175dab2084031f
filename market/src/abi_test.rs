use super::*;
use alloy_primitives::keccak256;
use alloy_sol_types::SolCall;

fn sample_on_chain_job(status: u8) -> OnChainJob {
    OnChainJob {
        id: job_key(9),
        client: Address::repeat_byte(0x11),
        freelancer: Address::ZERO,
        title: "Cross-chain Bridge Implementation".to_owned(),
        description: "Bridge between Ethereum and Arbitrum".to_owned(),
        budget: U256::from(8_000_u64),
        escrowAmount: U256::from(8_000_u64),
        deadline: U256::from(1_700_000_000_u64),
        status,
        createdAt: U256::from(1_690_000_000_u64),
    }
}

// =============================================================
// Selectors and encoding
// =============================================================

#[test]
fn selectors_match_solidity_signatures() {
    assert_eq!(createJobCall::SIGNATURE, "createJob(string,string,uint256,uint256,string[])");
    assert_eq!(voteOnDisputeCall::SIGNATURE, "voteOnDispute(bytes32,bool)");
    assert_eq!(acceptJobCall::SELECTOR[..], keccak256("acceptJob(bytes32)")[..4]);
    assert_eq!(getJobCall::SELECTOR[..], keccak256("getJob(bytes32)")[..4]);
}

#[test]
fn single_job_id_calls_encode_one_word() {
    let data = approveWorkCall { _jobId: job_key(3) }.abi_encode();
    assert_eq!(data.len(), 4 + 32);
    assert_eq!(data[..4], approveWorkCall::SELECTOR[..]);
    assert_eq!(data[4..], job_key(3)[..]);
}

#[test]
fn vote_encodes_boolean_word() {
    let data = voteOnDisputeCall { _jobId: job_key(1), _voteForFreelancer: true }.abi_encode();
    assert_eq!(data.len(), 4 + 64);
    assert_eq!(data[data.len() - 1], 1);
    assert!(data[36..67].iter().all(|b| *b == 0));
}

#[test]
fn create_job_call_round_trips_arguments() {
    let call = createJobCall {
        _title: "Audit".to_owned(),
        _description: "Audit the vault".to_owned(),
        _budget: U256::from(5_u64),
        _deadline: U256::from(1_000_u64),
        _skillsRequired: vec!["Solidity".to_owned(), "Security".to_owned()],
    };
    let decoded = createJobCall::abi_decode(&call.abi_encode(), true).expect("decode");
    assert_eq!(decoded._title, "Audit");
    assert_eq!(decoded._skillsRequired, vec!["Solidity", "Security"]);
    assert_eq!(decoded._deadline, U256::from(1_000_u64));
}

// =============================================================
// getJob response
// =============================================================

#[test]
fn get_job_return_decodes_struct() {
    let job = sample_on_chain_job(2);
    let encoded = getJobCall::abi_encode_returns(&(job.clone(),));
    let decoded = getJobCall::abi_decode_returns(&encoded, true).expect("decode");
    assert_eq!(decoded._0, job);
}

#[test]
fn chain_status_maps_to_ui_status() {
    assert_eq!(JobStatus::from(ChainJobStatus::Assigned), JobStatus::InProgress);
    assert_eq!(JobStatus::from(ChainJobStatus::Submitted), JobStatus::InProgress);
    assert_eq!(JobStatus::from(ChainJobStatus::Disputed), JobStatus::Disputed);
    assert_eq!(sample_on_chain_job(4).chain_status(), Ok(ChainJobStatus::Completed));
}

#[test]
fn unknown_chain_status_is_an_error() {
    assert_eq!(sample_on_chain_job(7).chain_status(), Err(7));
}

#[test]
fn unassigned_freelancer_is_none() {
    let mut job = sample_on_chain_job(0);
    assert_eq!(job.assigned_freelancer(), None);
    job.freelancer = Address::repeat_byte(0x22);
    assert_eq!(job.assigned_freelancer(), Some(Address::repeat_byte(0x22)));
}

#[test]
fn job_key_is_big_endian_id() {
    let key = job_key(258);
    assert_eq!(key[30], 1);
    assert_eq!(key[31], 2);
    assert!(key[..30].iter().all(|b| *b == 0));
}
